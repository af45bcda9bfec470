//! 사용자별 테이블 권한
//!
//! `<permissions user="...">` 블록 하나가 [`Permission`] 하나가 됩니다.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::document::SchemaNode;
use crate::error::Result;

/// 테이블 권한 (사용자 1명)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Permission {
    user: String,
    actions: Vec<String>,
}

impl Permission {
    /// `<permissions>` 노드에서 생성
    ///
    /// `<permission>` 자식의 텍스트를 문서 순서대로 모으며, 중복도 그대로 유지합니다.
    pub fn build<N: SchemaNode>(node: N) -> Result<Self> {
        let user = node.required_attribute("user")?.to_string();
        let actions = node
            .children_tagged("permission")
            .iter()
            .map(|child| child.text().unwrap_or_default().to_string())
            .collect();

        Ok(Self { user, actions })
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    /// 문서 순서의 action 목록
    pub fn actions(&self) -> &[String] {
        &self.actions
    }

    /// 순서/중복을 무시한 action 집합
    pub fn action_set(&self) -> BTreeSet<&str> {
        self.actions.iter().map(String::as_str).collect()
    }

    /// action 허용 여부 (대소문자 구분)
    pub fn allows(&self, action: &str) -> bool {
        self.actions.iter().any(|a| a == action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Element;
    use crate::error::Error;

    fn permissions(user: &str, actions: &[&str]) -> Element {
        actions.iter().fold(
            Element::new("permissions").with_attribute("user", user),
            |el, action| el.with_child(Element::new("permission").with_text(*action)),
        )
    }

    #[test]
    fn test_action_set_ignores_order() {
        let perm = Permission::build(&permissions("svc", &["UPDATE", "INSERT", "SELECT"])).unwrap();

        assert_eq!(perm.user(), "svc");
        assert_eq!(perm.actions(), ["UPDATE", "INSERT", "SELECT"]);
        assert_eq!(perm.action_set(), BTreeSet::from(["SELECT", "INSERT", "UPDATE"]));
        assert!(perm.allows("INSERT"));
        assert!(!perm.allows("DELETE"));
        assert!(!perm.allows("insert"));
    }

    #[test]
    fn test_duplicates_are_kept() {
        let perm = Permission::build(&permissions("svc", &["SELECT", "SELECT"])).unwrap();
        assert_eq!(perm.actions().len(), 2);
        assert_eq!(perm.action_set().len(), 1);
    }

    #[test]
    fn test_non_permission_children_ignored() {
        let node = permissions("svc", &["SELECT"])
            .with_child(Element::new("note").with_text("read only"))
            .with_child(Element::new("permission"));

        let perm = Permission::build(&node).unwrap();
        assert_eq!(perm.actions(), ["SELECT", ""]);
    }

    #[test]
    fn test_missing_user() {
        let err = Permission::build(&Element::new("permissions")).unwrap_err();
        assert!(matches!(err, Error::MissingAttribute { ref element, .. } if element == "permissions"));
    }
}
