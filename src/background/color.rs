//! CSS color validity check.
//!
//! Colors are stored verbatim; this module only decides whether a string is
//! one. It never normalizes.

use cssparser::{ParseError, Parser, ParserInput, Token};

/// CSS named colors (CSS Color Module Level 4), lowercase.
const NAMED_COLORS: &[&str] = &[
    "aliceblue", "antiquewhite", "aqua", "aquamarine", "azure", "beige", "bisque", "black",
    "blanchedalmond", "blue", "blueviolet", "brown", "burlywood", "cadetblue", "chartreuse",
    "chocolate", "coral", "cornflowerblue", "cornsilk", "crimson", "cyan", "darkblue",
    "darkcyan", "darkgoldenrod", "darkgray", "darkgreen", "darkgrey", "darkkhaki",
    "darkmagenta", "darkolivegreen", "darkorange", "darkorchid", "darkred", "darksalmon",
    "darkseagreen", "darkslateblue", "darkslategray", "darkslategrey", "darkturquoise",
    "darkviolet", "deeppink", "deepskyblue", "dimgray", "dimgrey", "dodgerblue", "firebrick",
    "floralwhite", "forestgreen", "fuchsia", "gainsboro", "ghostwhite", "gold", "goldenrod",
    "gray", "green", "greenyellow", "grey", "honeydew", "hotpink", "indianred", "indigo",
    "ivory", "khaki", "lavender", "lavenderblush", "lawngreen", "lemonchiffon", "lightblue",
    "lightcoral", "lightcyan", "lightgoldenrodyellow", "lightgray", "lightgreen", "lightgrey",
    "lightpink", "lightsalmon", "lightseagreen", "lightskyblue", "lightslategray",
    "lightslategrey", "lightsteelblue", "lightyellow", "lime", "limegreen", "linen", "magenta",
    "maroon", "mediumaquamarine", "mediumblue", "mediumorchid", "mediumpurple",
    "mediumseagreen", "mediumslateblue", "mediumspringgreen", "mediumturquoise",
    "mediumvioletred", "midnightblue", "mintcream", "mistyrose", "moccasin", "navajowhite",
    "navy", "oldlace", "olive", "olivedrab", "orange", "orangered", "orchid", "palegoldenrod",
    "palegreen", "paleturquoise", "palevioletred", "papayawhip", "peachpuff", "peru", "pink",
    "plum", "powderblue", "purple", "rebeccapurple", "red", "rosybrown", "royalblue",
    "saddlebrown", "salmon", "sandybrown", "seagreen", "seashell", "sienna", "silver",
    "skyblue", "slateblue", "slategray", "slategrey", "snow", "springgreen", "steelblue", "tan",
    "teal", "thistle", "tomato", "turquoise", "violet", "wheat", "white", "whitesmoke",
    "yellow", "yellowgreen",
];

const COLOR_FUNCTIONS: &[&str] = &[
    "rgb", "rgba", "hsl", "hsla", "hwb", "lab", "lch", "oklab", "oklch", "color",
];

/// Whether `value` is exactly one CSS color.
pub fn is_color(value: &str) -> bool {
    let mut input = ParserInput::new(value.trim());
    let mut parser = Parser::new(&mut input);
    parser.parse_entirely(parse_color_token).is_ok()
}

fn parse_color_token<'i>(input: &mut Parser<'i, '_>) -> Result<(), ParseError<'i, ()>> {
    let location = input.current_source_location();
    let token = input.next()?.clone();
    match token {
        Token::Ident(ref name) if is_named_color(name) => Ok(()),
        // `#fff` lexes as IDHash, `#222299` as Hash.
        Token::IDHash(ref h) | Token::Hash(ref h) if is_hex_color(h) => Ok(()),
        Token::Function(ref name) => {
            let name = name.to_ascii_lowercase();
            if !COLOR_FUNCTIONS.contains(&name.as_str()) {
                return Err(location.new_custom_error(()));
            }
            parse_closed_block(input, |block| parse_channels(block, name == "color"))
        }
        _ => Err(location.new_custom_error(())),
    }
}

/// `parse_nested_block` that also fails when the input ends before the
/// block's closing token, which cssparser otherwise supplies implicitly.
pub(super) fn parse_closed_block<'i, T, F>(
    input: &mut Parser<'i, '_>,
    parse: F,
) -> Result<T, ParseError<'i, ()>>
where
    F: for<'tt> FnOnce(&mut Parser<'i, 'tt>) -> Result<T, ParseError<'i, ()>>,
{
    let mut content_end = 0;
    let value = input.parse_nested_block(|block| {
        let value = parse(block)?;
        content_end = block.position().byte_index();
        Ok(value)
    })?;
    if input.position().byte_index() > content_end {
        Ok(value)
    } else {
        Err(input.new_custom_error(()))
    }
}

fn is_named_color(name: &str) -> bool {
    let lower = name.to_ascii_lowercase();
    lower == "transparent" || lower == "currentcolor" || NAMED_COLORS.contains(&lower.as_str())
}

fn is_hex_color(hex: &str) -> bool {
    matches!(hex.len(), 3 | 4 | 6 | 8) && hex.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Accepts 3 or 4 numeric channels separated by commas, spaces or the `/`
/// alpha separator. `color()` takes a leading color-space identifier.
fn parse_channels<'i>(
    input: &mut Parser<'i, '_>,
    leading_space: bool,
) -> Result<(), ParseError<'i, ()>> {
    if leading_space {
        input.expect_ident()?;
    }

    let mut channels = 0;
    while !input.is_exhausted() {
        let location = input.current_source_location();
        match input.next()? {
            Token::Comma | Token::Delim('/') => {}
            Token::Number { .. } | Token::Percentage { .. } | Token::Dimension { .. } => {
                channels += 1
            }
            Token::Ident(id) if id.eq_ignore_ascii_case("none") => channels += 1,
            _ => return Err(location.new_custom_error(())),
        }
    }

    if matches!(channels, 3 | 4) {
        Ok(())
    } else {
        Err(input.new_custom_error(()))
    }
}
