// src/semantics/relation.rs

/// One line of the relationship file, `word1:pos|code|word2:pos`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relation {
    pub word1: String,
    pub pos1: String,
    pub code: String,
    pub word2: String,
    pub pos2: String,
}

fn split_word(field: &str) -> (&str, &str) {
    field.split_once(':').unwrap_or((field, ""))
}

impl Relation {
    /// Parses a line. Blank lines, `#` comments and lines without exactly
    /// three `|` separated fields give `None`.
    pub fn parse_line(line: &str) -> Option<Relation> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return None;
        }
        let parts: Vec<&str> = line.split('|').collect();
        if parts.len() != 3 {
            return None;
        }
        let (word1, pos1) = split_word(parts[0]);
        let (word2, pos2) = split_word(parts[2]);
        if word1.is_empty() || word2.is_empty() {
            return None;
        }
        Some(Relation {
            word1: word1.to_string(),
            pos1: pos1.to_string(),
            code: parts[1].to_string(),
            word2: word2.to_string(),
            pos2: pos2.to_string(),
        })
    }
}

/// Which relations take part in an expansion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationFilter {
    /// Must occur somewhere in the code field
    pub code: String,
    /// Part of speech both words must carry, matched as `:<pos>` anywhere
    /// after the word so `dog:n:1` passes an `n` filter
    pub pos: String,
}

impl Default for RelationFilter {
    fn default() -> Self {
        Self {
            code: "2".to_string(),
            pos: "n".to_string(),
        }
    }
}

impl RelationFilter {
    pub fn new(code: impl Into<String>, pos: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            pos: pos.into(),
        }
    }

    pub fn accepts(&self, relation: &Relation) -> bool {
        let marker = format!(":{}", self.pos);
        let carries_pos = |pos: &str| format!(":{}", pos).contains(&marker);
        carries_pos(&relation.pos1)
            && carries_pos(&relation.pos2)
            && relation.code.contains(&self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line() {
        let r = Relation::parse_line("poodle:n|2|dog:n").unwrap();
        assert_eq!(r.word1, "poodle");
        assert_eq!(r.pos1, "n");
        assert_eq!(r.code, "2");
        assert_eq!(r.word2, "dog");
    }

    #[test]
    fn test_skipped_lines() {
        assert!(Relation::parse_line("").is_none());
        assert!(Relation::parse_line("   ").is_none());
        assert!(Relation::parse_line("# poodle:n|2|dog:n").is_none());
        assert!(Relation::parse_line("poodle:n|2").is_none());
        assert!(Relation::parse_line("a:n|2|b:n|c").is_none());
    }

    #[test]
    fn test_filter() {
        let filter = RelationFilter::default();
        assert!(filter.accepts(&Relation::parse_line("poodle:n|2|dog:n").unwrap()));
        // code only has to contain the configured value
        assert!(filter.accepts(&Relation::parse_line("poodle:n|12|dog:n").unwrap()));
        assert!(!filter.accepts(&Relation::parse_line("run:v|2|move:v").unwrap()));
        assert!(!filter.accepts(&Relation::parse_line("poodle:n|3|dog:n").unwrap()));
        assert!(!filter.accepts(&Relation::parse_line("poodle:n|2|dog").unwrap()));
    }

    #[test]
    fn test_filter_with_sense_suffix() {
        let filter = RelationFilter::default();
        let r = Relation::parse_line("dog:n:1|2|canine:n:2").unwrap();
        assert_eq!(r.word1, "dog");
        assert_eq!(r.pos1, "n:1");
        assert!(filter.accepts(&r));
        assert!(filter.accepts(&Relation::parse_line("dog:x:n|2|canine:n").unwrap()));
        assert!(!filter.accepts(&Relation::parse_line("dog:v:1|2|canine:n").unwrap()));
    }
}
