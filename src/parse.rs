// Turns the plain-text state file into a TableState.
//
//   <width> <height>
//   <x> <y> <type>
//   ...
//
// The header must match "digits SPACE digits" exactly. Ball rows only need
// "digits SPACE digits SPACE [012]" as a prefix. The type is the whole third
// space-separated token, and anything after it is ignored.

use crate::error::{Error, FormatError};
use crate::types::{Ball, BallKind, TableState};

pub fn parse(text: &str) -> Result<TableState, Error> {
    let mut lines: Vec<&str> = text.split('\n').map(str::trim).collect();

    // A trailing newline (or several) is not a ball row.
    // The header line itself is never dropped, so "" still fails as a bad header.
    while lines.len() > 1 && lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }

    let (width, height) = parse_header(lines[0])?;

    let mut balls = Vec::with_capacity(lines.len() - 1);
    for (i, line) in lines.iter().enumerate().skip(1) {
        balls.push(parse_ball_row(i + 1, line)?);
    }

    Ok(TableState::new(width, height, balls))
}

fn parse_header(line: &str) -> Result<(u32, u32), Error> {
    let invalid = || FormatError::InvalidHeader(line.to_string());

    let (w, rest) = take_digits(line).ok_or_else(invalid)?;
    let rest = rest.strip_prefix(' ').ok_or_else(invalid)?;
    let (h, rest) = take_digits(rest).ok_or_else(invalid)?;
    if !rest.is_empty() {
        return Err(invalid().into());
    }

    Ok((to_number(w)?, to_number(h)?))
}

/// `line_no` is 1-based, for error messages.
fn parse_ball_row(line_no: usize, line: &str) -> Result<Ball, Error> {
    let invalid = || FormatError::InvalidBallRow { line: line_no, content: line.to_string() };

    let (x, rest) = take_digits(line).ok_or_else(invalid)?;
    let rest = rest.strip_prefix(' ').ok_or_else(invalid)?;
    let (y, rest) = take_digits(rest).ok_or_else(invalid)?;
    let rest = rest.strip_prefix(' ').ok_or_else(invalid)?;
    if !matches!(rest.as_bytes().first(), Some(b'0'..=b'2')) {
        return Err(invalid().into());
    }

    // The prefix only vouches for the first digit; the type is the whole token.
    let kind_token = rest.split(' ').next().unwrap_or(rest);
    let kind = BallKind::from_code(to_number(kind_token)?);

    Ok(Ball { x: to_number(x)?, y: to_number(y)?, kind })
}

/// Split a leading run of ASCII digits off `s`. `None` if there is none.
fn take_digits(s: &str) -> Option<(&str, &str)> {
    let end = s.bytes().position(|b| !b.is_ascii_digit()).unwrap_or(s.len());
    if end == 0 {
        return None;
    }
    Some(s.split_at(end))
}

fn to_number(token: &str) -> Result<u32, Error> {
    token.parse::<u32>().map_err(|source| Error::Number { token: token.to_string(), source })
}
