//! 浮动聊天助手
//!
//! 对话只保存在内存中，关闭或刷新页面后从问候语重新开始。

use crate::components::icons::{Close, MessageCircle, Send};
use crate::i18n::use_i18n;
use crate::services::use_services;
use chrono::{Local, Utc};
use leptos::prelude::*;
use leptos::task::spawn_local;
use mediasi_shared::chat::{ChatMessage, Conversation};

#[component]
fn Bubble(message: ChatMessage) -> impl IntoView {
    let is_user = message.is_user();
    let time = message.sent_at.with_timezone(&Local).format("%H:%M").to_string();

    view! {
        <div class=if is_user { "chat chat-end" } else { "chat chat-start" }>
            <div class=if is_user { "chat-bubble chat-bubble-primary text-sm" } else { "chat-bubble text-sm" }>
                {message.body}
            </div>
            <div class="chat-footer opacity-50 text-xs">{time}</div>
        </div>
    }
}

#[component]
pub fn Chatbot() -> impl IntoView {
    let i18n = use_i18n();
    let services = use_services();

    let (open, set_open) = signal(false);
    let (draft, set_draft) = signal(String::new());
    let (is_typing, set_is_typing) = signal(false);
    let conversation = RwSignal::new(Conversation::with_greeting(Utc::now()));

    let send = move || {
        if is_typing.get_untracked() {
            return;
        }
        let text = draft.get_untracked();
        let mut accepted = false;
        conversation.update(|c| accepted = c.push_user(&text, Utc::now()).is_some());
        // 空白输入不产生消息，也不触发回复
        if !accepted {
            return;
        }
        set_draft.set(String::new());
        set_is_typing.set(true);

        let assistant = services.assistant();
        spawn_local(async move {
            let reply = assistant.reply().await;
            conversation.update(|c| {
                c.push_assistant(reply, Utc::now());
            });
            set_is_typing.set(false);
        });
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            send();
        }
    };

    view! {
        <Show
            when=move || open.get()
            fallback=move || view! {
                <button
                    class="btn btn-primary btn-circle btn-lg fixed bottom-6 right-6 shadow-lg z-50"
                    on:click=move |_| set_open.set(true)
                >
                    <MessageCircle attr:class="h-6 w-6" />
                </button>
            }
        >
            <div class="fixed bottom-6 right-6 w-80 h-96 bg-base-100 rounded-box shadow-xl z-50 flex flex-col">
                <div class="bg-primary text-primary-content p-4 rounded-t-box flex items-center justify-between">
                    <h3 class="font-medium">{move || i18n.t("chatbot.title")}</h3>
                    <button class="btn btn-ghost btn-xs btn-circle" on:click=move |_| set_open.set(false)>
                        <Close attr:class="h-5 w-5" />
                    </button>
                </div>

                <div class="flex-1 p-4 overflow-y-auto">
                    <For
                        each=move || conversation.with(|c| c.messages().to_vec())
                        key=|message| message.id
                        children=|message| view! { <Bubble message=message /> }
                    />
                    <Show when=move || is_typing.get()>
                        <div class="chat chat-start">
                            <div class="chat-bubble">
                                <span class="loading loading-dots loading-sm"></span>
                            </div>
                        </div>
                    </Show>
                </div>

                <div class="p-4 border-t border-base-300 flex gap-2">
                    <textarea
                        rows="2"
                        class="textarea textarea-bordered flex-1 text-sm resize-none"
                        placeholder=move || i18n.t("chatbot.placeholder")
                        on:input=move |ev| set_draft.set(event_target_value(&ev))
                        on:keydown=on_keydown
                        prop:value=draft
                    ></textarea>
                    <button
                        class="btn btn-primary btn-square"
                        disabled=move || draft.get().trim().is_empty() || is_typing.get()
                        on:click=move |_| send()
                    >
                        <Send attr:class="h-4 w-4" />
                    </button>
                </div>
            </div>
        </Show>
    }
}
