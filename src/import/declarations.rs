//! Inline `style` attribute parsing.

use cssparser::{
    AtRuleParser, CowRcStr, DeclarationParser, ParseError, Parser, ParserInput, ParserState,
    QualifiedRuleParser, RuleBodyItemParser, RuleBodyParser,
};

use crate::model::Style;
use crate::util::kebab_to_camel;

/// Declarations of a `style` attribute in source order: lowercased property
/// name and the raw value text. Malformed declarations are skipped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Declarations(Vec<(String, String)>);

impl Declarations {
    pub fn parse(style_attr: &str) -> Self {
        let mut input = ParserInput::new(style_attr);
        let mut parser = Parser::new(&mut input);
        let mut declarations = Vec::new();
        let mut list = DeclarationListParser {
            declarations: &mut declarations,
        };
        for result in RuleBodyParser::new(&mut parser, &mut list) {
            if let Err((err, source)) = result {
                log::trace!("skipping declaration {source:?}: {:?}", err.kind);
            }
        }
        Declarations(declarations)
    }

    /// Value of the last declaration of `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .rev()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// All declarations as a style map with camelCase keys.
    pub fn to_style(&self) -> Style {
        self.iter()
            .map(|(name, value)| (kebab_to_camel(name).into_owned(), value))
            .collect()
    }

    /// Only the named properties, in source order.
    pub fn to_style_filtered(&self, allowed: &[&str]) -> Style {
        self.iter()
            .filter(|(name, _)| allowed.contains(name))
            .map(|(name, value)| (kebab_to_camel(name).into_owned(), value))
            .collect()
    }
}

struct DeclarationListParser<'a> {
    declarations: &'a mut Vec<(String, String)>,
}

impl<'i> AtRuleParser<'i> for DeclarationListParser<'_> {
    type Prelude = ();
    type AtRule = ();
    type Error = ();
}

impl<'i> QualifiedRuleParser<'i> for DeclarationListParser<'_> {
    type Prelude = ();
    type QualifiedRule = ();
    type Error = ();
}

impl<'i> DeclarationParser<'i> for DeclarationListParser<'_> {
    type Declaration = ();
    type Error = ();

    fn parse_value<'t>(
        &mut self,
        name: CowRcStr<'i>,
        input: &mut Parser<'i, 't>,
        _start: &ParserState,
    ) -> Result<Self::Declaration, ParseError<'i, Self::Error>> {
        let start = input.position();
        while input.next_including_whitespace_and_comments().is_ok() {}
        let value = input.slice_from(start).trim();
        if value.is_empty() {
            return Err(input.new_custom_error(()));
        }
        self.declarations
            .push((name.to_ascii_lowercase(), value.to_string()));
        Ok(())
    }
}

impl<'i> RuleBodyItemParser<'i, (), ()> for DeclarationListParser<'_> {
    fn parse_declarations(&self) -> bool {
        true
    }
    fn parse_qualified(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_order_and_raw_values() {
        let decls = Declarations::parse(
            "font-family: 'Open Sans', sans-serif; padding: 12px 24px;background: linear-gradient(90deg, red 0.00%, blue 100.00%)",
        );
        let pairs: Vec<_> = decls.iter().collect();
        assert_eq!(
            pairs,
            vec![
                ("font-family", "'Open Sans', sans-serif"),
                ("padding", "12px 24px"),
                ("background", "linear-gradient(90deg, red 0.00%, blue 100.00%)"),
            ]
        );
    }

    #[test]
    fn test_malformed_declarations_skipped() {
        let decls = Declarations::parse("color: red; nonsense; : 3px; width: ; HEIGHT: 20px;");
        let pairs: Vec<_> = decls.iter().collect();
        assert_eq!(pairs, vec![("color", "red"), ("height", "20px")]);
    }

    #[test]
    fn test_to_style() {
        let decls = Declarations::parse("border-top: 1px solid #ccc; padding: 10px 0; color: red");
        let style = decls.to_style();
        let keys: Vec<_> = style.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["borderTop", "padding", "color"]);

        let filtered = decls.to_style_filtered(&["color", "padding"]);
        assert_eq!(filtered.get_string("padding").as_deref(), Some("10px 0"));
        assert!(!filtered.contains_key("borderTop"));
    }

    #[test]
    fn test_empty() {
        assert_eq!(Declarations::parse(""), Declarations::default());
        assert_eq!(Declarations::parse("  ;; "), Declarations::default());
    }
}
