use super::items::{Element, Tag};
use std::collections::HashMap;

/// Key lookup over an element's tag list. Absent keys read as the empty string.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TagMap<'a> {
    tags: HashMap<&'a str, &'a str>,
}

impl<'a> TagMap<'a> {
    pub fn new(tags: &'a [Tag]) -> Self {
        TagMap::from_pairs(tags.iter().map(|(key, value)| (key.as_str(), value.as_str())))
    }

    /// Later pairs overwrite earlier ones with the same key.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        TagMap {
            tags: pairs.into_iter().collect(),
        }
    }

    pub fn get(&self, key: &str) -> &'a str {
        self.get_or(key, "")
    }

    pub fn get_or(&self, key: &str, default: &'a str) -> &'a str {
        self.tags.get(key).copied().unwrap_or(default)
    }

    pub fn contains(&self, key: &str, value: &str) -> bool {
        self.tags.get(key).map_or(false, |v| *v == value)
    }
}

impl<'a> From<&'a Element> for TagMap<'a> {
    fn from(element: &'a Element) -> Self {
        TagMap::new(element.tags())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::tags;

    #[test]
    fn last_duplicate_wins() {
        let list = tags(&[("amenity", "cafe"), ("name", "Jay Fai"), ("amenity", "restaurant")]);
        let map = TagMap::new(&list);
        assert_eq!(map, TagMap::from_pairs(vec![("amenity", "restaurant"), ("name", "Jay Fai")]));
        assert_eq!(map.get("amenity"), "restaurant");
        assert_eq!(map.get("name"), "Jay Fai");
    }

    #[test]
    fn absent_keys_read_empty() {
        let map = TagMap::default();
        assert_eq!(map.get("cuisine"), "");
        assert_eq!(map.get_or("name", "N/A"), "N/A");
    }

    #[test]
    fn contains_compares_values() {
        let list = tags(&[("railway", "station")]);
        let map = TagMap::new(&list);
        assert!(map.contains("railway", "station"));
        assert!(!map.contains("railway", "halt"));
        assert!(!map.contains("station", "station"));
    }

    #[test]
    fn long_values_survive() {
        // lengths around the inline/heap boundary of the tag string type
        for n in 20..=40 {
            let value = "a".repeat(n);
            let list = tags(&[("name", value.as_str())]);
            assert_eq!(list[0].1.len(), n);
            assert_eq!(TagMap::new(&list).get("name"), value);
        }

        let list = tags(&[("name", "ร้านเจ๊ไฝ"), ("name:th", "สถานีสยาม")]);
        let map = TagMap::new(&list);
        assert_eq!(map.get("name"), "ร้านเจ๊ไฝ");
        assert_eq!(map.get("name:th"), "สถานีสยาม");
    }
}
