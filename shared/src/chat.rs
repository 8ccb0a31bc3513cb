//! 聊天窗口的消息模型
//!
//! 消息列表只追加、不持久化。助手回复从固定的候选集中伪随机挑选。

use crate::fixtures::{CANNED_RESPONSES, CHAT_GREETING};
use chrono::{DateTime, Utc};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Author {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: u64,
    pub body: String,
    pub author: Author,
    pub sent_at: DateTime<Utc>,
}

impl ChatMessage {
    pub fn is_user(&self) -> bool {
        self.author == Author::User
    }
}

/// 一次会话的消息列表
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
    next_id: u64,
}

impl Conversation {
    /// 以问候语开场
    pub fn with_greeting(now: DateTime<Utc>) -> Self {
        let mut conversation = Self {
            messages: Vec::new(),
            next_id: 1,
        };
        conversation.push(CHAT_GREETING.to_string(), Author::Assistant, now);
        conversation
    }

    /// 追加用户消息（去除首尾空白），空白输入返回 `None`
    pub fn push_user(&mut self, text: &str, now: DateTime<Utc>) -> Option<&ChatMessage> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(self.push(trimmed.to_string(), Author::User, now))
    }

    pub fn push_assistant(&mut self, text: impl Into<String>, now: DateTime<Utc>) -> &ChatMessage {
        self.push(text.into(), Author::Assistant, now)
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    fn push(&mut self, body: String, author: Author, now: DateTime<Utc>) -> &ChatMessage {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(ChatMessage {
            id,
            body,
            author,
            sent_at: now,
        });
        &self.messages[self.messages.len() - 1]
    }
}

/// 预设回复选择器
#[derive(Debug, Clone)]
pub struct CannedResponder {
    rng: SmallRng,
}

impl CannedResponder {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn pick(&mut self) -> &'static str {
        CANNED_RESPONSES[self.rng.gen_range(0..CANNED_RESPONSES.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversation_starts_with_greeting() {
        let conversation = Conversation::with_greeting(Utc::now());
        assert_eq!(conversation.len(), 1);
        assert_eq!(conversation.messages()[0].body, CHAT_GREETING);
        assert!(!conversation.messages()[0].is_user());
    }

    #[test]
    fn test_blank_user_input_is_ignored() {
        let mut conversation = Conversation::with_greeting(Utc::now());
        assert!(conversation.push_user("   \n", Utc::now()).is_none());
        assert_eq!(conversation.len(), 1);
    }

    #[test]
    fn test_messages_are_trimmed_and_append_only() {
        let mut conversation = Conversation::with_greeting(Utc::now());
        let id = conversation.push_user("  Is mediation binding? ", Utc::now()).map(|m| m.id);
        conversation.push_assistant("reply", Utc::now());

        let bodies: Vec<_> = conversation.messages().iter().map(|m| m.body.as_str()).collect();
        assert_eq!(bodies[1], "Is mediation binding?");
        assert_eq!(bodies[2], "reply");
        assert_eq!(id, Some(2));
        assert!(conversation.messages().windows(2).all(|w| w[0].id < w[1].id));
    }

    #[test]
    fn test_responder_is_deterministic_per_seed_and_stays_in_set() {
        let mut a = CannedResponder::seeded(7);
        let mut b = CannedResponder::seeded(7);
        for _ in 0..20 {
            let reply = a.pick();
            assert_eq!(reply, b.pick());
            assert!(CANNED_RESPONSES.contains(&reply));
        }
    }
}
