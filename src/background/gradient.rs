//! `linear-gradient(...)` decoding.

use cssparser::{ParseError, Parser, ParserInput, Token};

use super::color::{is_color, parse_closed_block};
use super::{ColorStop, LinearGradient};

/// Angle used when the gradient names none (top to bottom).
pub const DEFAULT_ANGLE: f64 = 180.0;

/// Decode a `linear-gradient(...)` value.
///
/// Returns `None` for anything with fewer than two stops or a stop whose
/// color is not a CSS color.
pub fn parse_linear_gradient(value: &str) -> Option<LinearGradient> {
    let parts = split_arguments(value)?;
    let mut parts = parts.as_slice();

    let mut angle = DEFAULT_ANGLE;
    if let Some(first) = parts.first()
        && let Some(deg) = parse_angle(first)
    {
        angle = deg;
        parts = &parts[1..];
    }

    if parts.len() < 2 {
        return None;
    }

    let mut colors = Vec::with_capacity(parts.len());
    let mut positions = Vec::with_capacity(parts.len());
    for part in parts {
        let (color, position) = parse_stop(part)?;
        colors.push(color);
        positions.push(position);
    }

    let stops = colors
        .into_iter()
        .zip(resolve_positions(&positions))
        .map(|(color, position)| ColorStop { color, position })
        .collect();

    Some(LinearGradient { angle, stops })
}

/// The trimmed, top-level comma-separated arguments of the function.
fn split_arguments(value: &str) -> Option<Vec<String>> {
    let mut input = ParserInput::new(value);
    let mut parser = Parser::new(&mut input);
    parser
        .expect_function_matching("linear-gradient")
        .ok()?;
    let arguments = parse_closed_block(&mut parser, |block| {
        block.parse_comma_separated(|arg| -> Result<String, ParseError<'_, ()>> {
            let start = arg.position();
            while arg.next().is_ok() {}
            Ok(arg.slice_from(start).trim().to_string())
        })
    })
    .ok()?;
    parser.expect_exhausted().ok()?;
    Some(arguments)
}

/// `<number>deg` as the whole argument.
fn parse_angle(part: &str) -> Option<f64> {
    let mut input = ParserInput::new(part);
    let mut parser = Parser::new(&mut input);
    parser
        .parse_entirely(|i| -> Result<_, ParseError<'_, ()>> {
            let location = i.current_source_location();
            match i.next()? {
                Token::Dimension { unit, .. } if unit.eq_ignore_ascii_case("deg") => Ok(()),
                _ => Err(location.new_custom_error(())),
            }
        })
        .ok()?;
    // Read the number from the source text; the token carries an f32.
    let number = part.trim();
    number[..number.len() - 3]
        .parse()
        .ok()
        .filter(|angle: &f64| angle.is_finite())
}

/// `<color> <number>%` or `<color>`.
fn parse_stop(part: &str) -> Option<(String, Option<f64>)> {
    if let Some((color, percent)) = split_trailing_percentage(part)
        && is_color(color)
    {
        return Some((color.to_string(), Some(percent)));
    }
    is_color(part).then(|| (part.to_string(), None))
}

/// Split `part` before a final percentage token that follows whitespace.
fn split_trailing_percentage(part: &str) -> Option<(&str, f64)> {
    let mut input = ParserInput::new(part);
    let mut parser = Parser::new(&mut input);

    let mut last = None;
    let mut after_whitespace = false;
    loop {
        let start = parser.position();
        match parser.next_including_whitespace() {
            Ok(Token::WhiteSpace(_)) => {
                after_whitespace = true;
                continue;
            }
            Ok(Token::Percentage { .. }) if after_whitespace => last = Some(start),
            Ok(_) => last = None,
            Err(_) => break,
        }
        after_whitespace = false;
    }

    let start = last?.byte_index();
    let color = part[..start].trim();
    let percent = part[start..].trim().strip_suffix('%')?.parse().ok()?;
    (!color.is_empty()).then_some((color, percent))
}

/// Fill in missing stop positions.
///
/// With no explicit positions the stops are spread evenly over 0..=100.
/// Otherwise an unspecified first stop sits at 0 and an unspecified last
/// stop at 100, and every run of unspecified stops between two known
/// positions is spaced evenly between them.
pub(crate) fn resolve_positions(positions: &[Option<f64>]) -> Vec<f64> {
    let n = positions.len();
    if n == 0 {
        return Vec::new();
    }

    if positions.iter().all(Option::is_none) {
        if n == 1 {
            return vec![0.0];
        }
        return (0..n).map(|i| i as f64 / (n - 1) as f64 * 100.0).collect();
    }

    let mut anchored: Vec<Option<f64>> = positions.to_vec();
    if anchored[0].is_none() {
        anchored[0] = Some(0.0);
    }
    if anchored[n - 1].is_none() {
        anchored[n - 1] = Some(100.0);
    }

    let mut resolved = vec![0.0; n];
    let mut before_index = 0;
    let mut before = anchored[0].unwrap_or(0.0);
    resolved[0] = before;

    for i in 1..n {
        let Some(after) = anchored[i] else {
            continue;
        };
        let gap = i - before_index - 1;
        let step = (after - before) / (gap + 1) as f64;
        for k in 1..=gap {
            resolved[before_index + k] = before + k as f64 * step;
        }
        resolved[i] = after;
        before_index = i;
        before = after;
    }

    resolved
}
