//! 스키마 문서 트리
//!
//! 모델 빌더는 특정 XML 파서에 묶이지 않고 [`SchemaNode`] 트레이트만 사용합니다.
//!
//! - `roxmltree::Node`: 파싱된 문서를 복사 없이 그대로 순회
//! - [`Element`]: 소유권을 가진 트리 (코드로 문서를 구성하거나 파서 수명과 분리할 때)

use serde::Serialize;

use crate::error::{Error, Result};

/// 스키마 문서의 노드
///
/// 태그 이름, 속성 조회(존재 여부 포함), 순서가 보존된 자식 엘리먼트, 텍스트를 제공합니다.
pub trait SchemaNode: Sized {
    /// 태그 이름 (네임스페이스 제외)
    fn tag(&self) -> &str;

    /// 속성 값 (없으면 `None`)
    fn attribute(&self, name: &str) -> Option<&str>;

    /// 자식 엘리먼트 (문서 순서)
    fn children(&self) -> Vec<Self>;

    /// 첫 번째 텍스트 내용
    fn text(&self) -> Option<&str>;

    /// 필수 속성 조회
    fn required_attribute(&self, name: &str) -> Result<&str> {
        self.attribute(name)
            .ok_or_else(|| Error::missing(self.tag(), name))
    }

    /// 특정 태그의 자식 엘리먼트만
    fn children_tagged(&self, tag: &str) -> Vec<Self> {
        self.children()
            .into_iter()
            .filter(|child| child.tag() == tag)
            .collect()
    }
}

impl<'a, 'input: 'a> SchemaNode for roxmltree::Node<'a, 'input> {
    fn tag(&self) -> &str {
        self.tag_name().name()
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        roxmltree::Node::attribute(self, name)
    }

    fn children(&self) -> Vec<Self> {
        roxmltree::Node::children(self)
            .filter(|node| node.is_element())
            .collect()
    }

    fn text(&self) -> Option<&str> {
        roxmltree::Node::text(self)
    }
}

/// 소유권을 가진 문서 엘리먼트
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Element {
    tag: String,
    attributes: Vec<(String, String)>,
    text: Option<String>,
    children: Vec<Element>,
}

impl Element {
    /// 빈 엘리먼트 생성
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// 속성 추가 (같은 이름이 있으면 교체)
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((name, value)),
        }
        self
    }

    /// 텍스트 설정
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// 자식 엘리먼트 추가
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// XML 문자열을 파싱하여 루트 엘리먼트 반환
    pub fn parse(xml: &str) -> Result<Self> {
        let doc = roxmltree::Document::parse(xml)?;
        Ok(Self::from_node(doc.root_element()))
    }

    fn from_node(node: roxmltree::Node<'_, '_>) -> Self {
        Self {
            tag: node.tag_name().name().to_string(),
            attributes: node
                .attributes()
                .map(|attr| (attr.name().to_string(), attr.value().to_string()))
                .collect(),
            text: node.text().map(str::to_string),
            children: SchemaNode::children(&node)
                .into_iter()
                .map(Self::from_node)
                .collect(),
        }
    }
}

impl<'a> SchemaNode for &'a Element {
    fn tag(&self) -> &str {
        &self.tag
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    fn children(&self) -> Vec<Self> {
        self.children.iter().collect()
    }

    fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keeps_element_children_in_order() {
        let root = Element::parse(
            r#"<database>
                <table name="a"/>
                <!-- comment -->
                <view name="v"/>
                <table name="b"/>
            </database>"#,
        )
        .unwrap();

        let node = &root;
        let children = node.children();
        let tags: Vec<&str> = children.iter().map(|c| c.tag()).collect();
        assert_eq!(tags, vec!["table", "view", "table"]);
        assert_eq!(node.children_tagged("table").len(), 2);
    }

    #[test]
    fn test_attribute_presence() {
        let element = Element::new("column")
            .with_attribute("name", "id")
            .with_attribute("length", "");
        let node = &element;

        assert_eq!(node.attribute("name"), Some("id"));
        assert_eq!(node.attribute("length"), Some(""));
        assert_eq!(node.attribute("type"), None);

        let err = node.required_attribute("type").unwrap_err();
        assert!(matches!(err, Error::MissingAttribute { .. }));
    }

    #[test]
    fn test_with_attribute_replaces_existing() {
        let element = Element::new("column")
            .with_attribute("type", "int")
            .with_attribute("type", "varchar");
        assert_eq!((&element).attribute("type"), Some("varchar"));
    }

    #[test]
    fn test_roxmltree_node_text() {
        let doc = roxmltree::Document::parse(
            "<column><fkey_table>Users</fkey_table><fkey_column/></column>",
        )
        .unwrap();
        let root = doc.root_element();
        let children = SchemaNode::children(&root);

        assert_eq!(SchemaNode::text(&children[0]), Some("Users"));
        assert_eq!(SchemaNode::text(&children[1]), None);
    }

    #[test]
    fn test_parse_invalid_xml() {
        let err = Element::parse("<database><table></database>").unwrap_err();
        assert_eq!(err.code(), "DOCUMENT_PARSE_ERROR");
    }
}
