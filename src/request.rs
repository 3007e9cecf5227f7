//! Building and validating request bodies before anything is sent.

use crate::error::PushError;
use serde_json::{Map, Value, json};

/// Loosely shaped tag input: a single tag, a (possibly nested) list, or nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagInput {
    One(String),
    Many(Vec<TagInput>),
    Nothing,
}

impl From<&str> for TagInput {
    fn from(tag: &str) -> Self {
        TagInput::One(tag.to_string())
    }
}

impl From<String> for TagInput {
    fn from(tag: String) -> Self {
        TagInput::One(tag)
    }
}

impl<T: Into<TagInput>> From<Option<T>> for TagInput {
    fn from(tag: Option<T>) -> Self {
        tag.map_or(TagInput::Nothing, Into::into)
    }
}

impl<T: Into<TagInput>> From<Vec<T>> for TagInput {
    fn from(tags: Vec<T>) -> Self {
        TagInput::Many(tags.into_iter().map(Into::into).collect())
    }
}

impl TagInput {
    fn collect_into(self, out: &mut Vec<String>) {
        match self {
            TagInput::One(tag) => {
                let trimmed = tag.trim();
                if !trimmed.is_empty() {
                    out.push(trimmed.to_string());
                }
            }
            TagInput::Many(items) => items.into_iter().for_each(|item| item.collect_into(out)),
            TagInput::Nothing => {}
        }
    }
}

/// Normalises tag input into a flat list of trimmed, non-blank tags.
///
/// Fails when nothing usable is left.
pub fn build_tags(input: impl Into<TagInput>) -> Result<Vec<String>, PushError> {
    let mut tags = Vec::new();
    input.into().collect_into(&mut tags);
    if tags.is_empty() {
        return Err(PushError::InvalidArgument("tags should not be empty".to_string()));
    }
    Ok(tags)
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum TagsUpdate {
    Change { add: Vec<String>, remove: Vec<String> },
    Clear,
}

/// Body of a device update (`POST /v3/devices/{registration_id}`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceUpdate {
    tags: Option<TagsUpdate>,
    alias: Option<String>,
    mobile: Option<String>,
}

impl DeviceUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_tags(mut self, tags: impl Into<TagInput>) -> Result<Self, PushError> {
        let (mut add, remove) = self.take_changes();
        add.extend(build_tags(tags)?);
        self.tags = Some(TagsUpdate::Change { add, remove });
        Ok(self)
    }

    pub fn remove_tags(mut self, tags: impl Into<TagInput>) -> Result<Self, PushError> {
        let (add, mut remove) = self.take_changes();
        remove.extend(build_tags(tags)?);
        self.tags = Some(TagsUpdate::Change { add, remove });
        Ok(self)
    }

    /// Drops every tag of the device. Replaces any pending add/remove.
    pub fn clear_tags(mut self) -> Self {
        self.tags = Some(TagsUpdate::Clear);
        self
    }

    /// Sets the alias; an empty string clears it.
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn mobile(mut self, mobile: impl Into<String>) -> Self {
        self.mobile = Some(mobile.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_none() && self.alias.is_none() && self.mobile.is_none()
    }

    fn take_changes(&mut self) -> (Vec<String>, Vec<String>) {
        match self.tags.take() {
            Some(TagsUpdate::Change { add, remove }) => (add, remove),
            _ => (Vec::new(), Vec::new()),
        }
    }

    /// Renders the JSON body. An update that sets nothing is rejected.
    pub fn into_body(self) -> Result<Value, PushError> {
        if self.is_empty() {
            return Err(PushError::InvalidArgument(
                "device update requires tags, alias or mobile".to_string(),
            ));
        }

        let mut body = Map::new();
        match self.tags {
            Some(TagsUpdate::Clear) => {
                body.insert("tags".to_string(), json!(""));
            }
            Some(TagsUpdate::Change { add, remove }) => {
                let mut tags = Map::new();
                if !add.is_empty() {
                    tags.insert("add".to_string(), json!(add));
                }
                if !remove.is_empty() {
                    tags.insert("remove".to_string(), json!(remove));
                }
                body.insert("tags".to_string(), Value::Object(tags));
            }
            None => {}
        }
        if let Some(alias) = self.alias {
            body.insert("alias".to_string(), json!(alias));
        }
        if let Some(mobile) = self.mobile {
            body.insert("mobile".to_string(), json!(mobile));
        }
        Ok(Value::Object(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_tags_rejects_blank_input() {
        assert!(matches!(build_tags(""), Err(PushError::InvalidArgument(_))));
        assert!(build_tags(" ").is_err());
        assert!(build_tags(Vec::<&str>::new()).is_err());
        assert!(build_tags(None::<&str>).is_err());

        let junk = vec![
            TagInput::from(""),
            TagInput::from(" "),
            TagInput::from("   "),
            TagInput::from(Vec::<&str>::new()),
            TagInput::from(vec![""]),
            TagInput::from(vec![" "]),
            TagInput::Nothing,
        ];
        assert!(build_tags(junk).is_err());
    }

    #[test]
    fn test_build_tags_filters_and_flattens() {
        assert_eq!(build_tags(vec!["tag1", "tag2"]).unwrap(), vec!["tag1", "tag2"]);

        let mixed = vec![
            TagInput::from("tag1"),
            TagInput::from(vec![" tag2 "]),
            TagInput::from(""),
            TagInput::from(" "),
            TagInput::from(vec![""]),
            TagInput::Nothing,
        ];
        assert_eq!(build_tags(mixed).unwrap(), vec!["tag1", "tag2"]);

        assert_eq!(build_tags("tag").unwrap(), vec!["tag"]);
    }

    #[test]
    fn test_empty_update_is_rejected() {
        let err = DeviceUpdate::new().into_body().unwrap_err();
        assert!(matches!(err, PushError::InvalidArgument(_)));
    }

    #[test]
    fn test_tag_changes_body() {
        let body = DeviceUpdate::new()
            .add_tags(vec!["a", "b"])
            .unwrap()
            .remove_tags("c")
            .unwrap()
            .into_body()
            .unwrap();
        assert_eq!(body, json!({"tags": {"add": ["a", "b"], "remove": ["c"]}}));
    }

    #[test]
    fn test_add_tags_validates() {
        assert!(DeviceUpdate::new().add_tags(" ").is_err());
    }

    #[test]
    fn test_clear_tags_overrides_changes() {
        let body = DeviceUpdate::new()
            .add_tags("a")
            .unwrap()
            .clear_tags()
            .into_body()
            .unwrap();
        assert_eq!(body, json!({"tags": ""}));
    }

    #[test]
    fn test_alias_and_mobile_body() {
        let body = DeviceUpdate::new()
            .alias("")
            .mobile("13800138000")
            .into_body()
            .unwrap();
        assert_eq!(body, json!({"alias": "", "mobile": "13800138000"}));
    }
}
