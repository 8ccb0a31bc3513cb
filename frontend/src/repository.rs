//! 身份仓库
//!
//! 登录按 (email, role) 查找，注册直接追加。
//! 内存实现只在本次页面生命周期内有效，刷新后只剩下持久化的当前身份。

use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;
use chrono::Utc;
use mediasi_shared::fixtures::seed_identities;
use mediasi_shared::{Identity, Role};

use crate::error::AppResult;

#[async_trait(?Send)]
pub trait IdentityRepository {
    async fn find_by_email_and_role(&self, email: &str, role: Role) -> AppResult<Option<Identity>>;
    /// 不检查 email 是否重复
    async fn insert(&self, identity: Identity) -> AppResult<()>;
}

/// 内存实现
#[derive(Debug, Clone, Default)]
pub struct InMemoryIdentityRepository {
    identities: Rc<RefCell<Vec<Identity>>>,
}

impl InMemoryIdentityRepository {
    pub fn new(identities: Vec<Identity>) -> Self {
        Self {
            identities: Rc::new(RefCell::new(identities)),
        }
    }

    /// 预置演示账号
    pub fn seeded() -> Self {
        Self::new(seed_identities(Utc::now()))
    }

    pub fn len(&self) -> usize {
        self.identities.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.identities.borrow().is_empty()
    }
}

#[async_trait(?Send)]
impl IdentityRepository for InMemoryIdentityRepository {
    async fn find_by_email_and_role(&self, email: &str, role: Role) -> AppResult<Option<Identity>> {
        Ok(self
            .identities
            .borrow()
            .iter()
            .find(|identity| identity.matches(email, role))
            .cloned())
    }

    async fn insert(&self, identity: Identity) -> AppResult<()> {
        self.identities.borrow_mut().push(identity);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seeded_lookup_matches_email_and_role() {
        let repo = InMemoryIdentityRepository::seeded();
        let jane = repo
            .find_by_email_and_role("jane@example.com", Role::Mediator)
            .await
            .unwrap();
        assert_eq!(jane.map(|i| i.name), Some("Jane Smith".to_string()));

        let mismatch = repo
            .find_by_email_and_role("jane@example.com", Role::Applicant)
            .await
            .unwrap();
        assert!(mismatch.is_none());
    }

    #[tokio::test]
    async fn test_insert_allows_duplicate_emails() {
        let repo = InMemoryIdentityRepository::seeded();
        let dup = Identity::unverified("John Again", "john@example.com", Role::Applicant, Utc::now());
        repo.insert(dup).await.unwrap();
        assert_eq!(repo.len(), 4);

        // 查找返回第一个匹配项
        let found = repo
            .find_by_email_and_role("john@example.com", Role::Applicant)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.name, "John Doe");
    }
}
