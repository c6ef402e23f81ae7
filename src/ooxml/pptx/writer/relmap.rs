/// Relationship ID mapper used while packaging a presentation.
///
/// Relationships are created before any slide XML is generated; the mapper
/// then hands each shape the rId of the relationship backing its click action.
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct RelationshipMapper {
    /// Maps (slide_index, shape_index) to the click-action relationship ID
    click_ids: HashMap<(usize, usize), String>,
}

impl RelationshipMapper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the relationship of the click action of a shape.
    pub fn add_click(&mut self, slide_index: usize, shape_index: usize, rel_id: String) {
        self.click_ids.insert((slide_index, shape_index), rel_id);
    }

    pub fn get_click_id(&self, slide_index: usize, shape_index: usize) -> Option<&str> {
        self.click_ids
            .get(&(slide_index, shape_index))
            .map(|s| s.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_per_slide() {
        let mut mapper = RelationshipMapper::new();
        mapper.add_click(0, 1, "rId2".to_string());
        mapper.add_click(1, 1, "rId3".to_string());
        assert_eq!(mapper.get_click_id(0, 1), Some("rId2"));
        assert_eq!(mapper.get_click_id(1, 1), Some("rId3"));
        assert_eq!(mapper.get_click_id(0, 0), None);
    }
}
