/// Page template tag used to pick a renderer.
///
/// Unknown tags are kept rather than rejected: the content source may
/// introduce templates this app does not know yet, and those render nothing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Template {
    Multiple,
    Page,
    Contact,
    Temples,
    Temple,
    Unknown(String),
}

impl Template {
    pub fn parse(tag: &str) -> Self {
        match tag {
            "multiple" => Template::Multiple,
            "page" => Template::Page,
            "contact" => Template::Contact,
            "temples" => Template::Temples,
            "temple" => Template::Temple,
            other => Template::Unknown(other.to_string()),
        }
    }

    /// Whether this template renders anything at all.
    pub fn is_known(&self) -> bool {
        !matches!(self, Template::Unknown(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_tags() {
        assert_eq!(Template::parse("multiple"), Template::Multiple);
        assert_eq!(Template::parse("page"), Template::Page);
        assert_eq!(Template::parse("contact"), Template::Contact);
        assert_eq!(Template::parse("temples"), Template::Temples);
        assert_eq!(Template::parse("temple"), Template::Temple);
    }

    #[test]
    fn unknown_tag_is_kept() {
        let t = Template::parse("gallery");
        assert_eq!(t, Template::Unknown("gallery".to_string()));
        assert!(!t.is_known());
    }

    #[test]
    fn tags_are_case_sensitive() {
        assert!(!Template::parse("Temples").is_known());
    }
}
