use serde::{Deserialize, Serialize};

/// `agencyList` envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct AgencyList {
    #[serde(rename(deserialize = "agency"))]
    pub agencies: Vec<Agency>,
}

/// A transit operator served by the feed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Agency {
    #[serde(rename(deserialize = "@tag"))]
    pub tag: String,
    #[serde(rename(deserialize = "@title"))]
    pub title: String,
    #[serde(rename(deserialize = "@regionTitle"))]
    pub region_title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_attribute_is_empty() {
        let list: AgencyList =
            quick_xml::de::from_str(r#"<body><agency tag="alpha" title="The First"/></body>"#)
                .unwrap();
        assert_eq!(list.agencies.len(), 1);
        assert_eq!(list.agencies[0].tag, "alpha");
        assert_eq!(list.agencies[0].region_title, "");
    }

    #[test]
    fn test_serializes_with_field_names() {
        let agency = Agency {
            tag: "alpha".into(),
            title: "The First".into(),
            region_title: "Somewhere".into(),
        };
        let json = serde_json::to_value(&agency).unwrap();
        assert_eq!(json["region_title"], "Somewhere");
    }
}
