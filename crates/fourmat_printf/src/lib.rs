//! fourmat_printf - a printf-family conversion formatter
//!
//! Parses `%`-conversion specifications (flags, width, precision,
//! conversion letter) and substitutes a slice of [`Arg`] values in
//! order, with C-compatible padding, truncation, and integer-cast
//! semantics. The fourmat emitter builds one composite template per
//! emit call and hands it here for a single substitution pass.

use std::borrow::Cow;
use std::fmt;

use winnow::ascii::dec_uint;
use winnow::combinator::{opt, preceded};
use winnow::error::{ContextError, ErrMode};
use winnow::prelude::*;
use winnow::token::{any, one_of};

use thiserror::Error;

/// A conversion letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conv {
    /// `d` / `i`
    Signed,
    /// `u`
    Unsigned,
    /// `o`
    Octal,
    /// `x`
    HexLower,
    /// `X`
    HexUpper,
    /// `c`
    Char,
    /// `s`
    Str,
    /// `f`
    Float,
    /// `e`
    SciLower,
    /// `E`
    SciUpper,
    /// `g`
    GenLower,
    /// `G`
    GenUpper,
}

impl Conv {
    fn letter(self) -> char {
        match self {
            Conv::Signed => 'd',
            Conv::Unsigned => 'u',
            Conv::Octal => 'o',
            Conv::HexLower => 'x',
            Conv::HexUpper => 'X',
            Conv::Char => 'c',
            Conv::Str => 's',
            Conv::Float => 'f',
            Conv::SciLower => 'e',
            Conv::SciUpper => 'E',
            Conv::GenLower => 'g',
            Conv::GenUpper => 'G',
        }
    }
}

/// The optional flag characters of a conversion specification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpecFlags {
    /// `-`: left-adjust within the field width.
    pub minus: bool,
    /// `+`: always print a sign for signed conversions.
    pub plus: bool,
    /// ` `: print a space where a plus sign would go.
    pub space: bool,
    /// `0`: pad numbers with leading zeros.
    pub zero: bool,
    /// `#`: alternate form (`0x` prefix, `0` octal prefix).
    pub alt: bool,
}

/// One parsed conversion specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spec {
    pub flags: SpecFlags,
    pub width: Option<usize>,
    pub precision: Option<usize>,
    pub conv: Conv,
}

impl fmt::Display for Spec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "%")?;
        if self.flags.minus {
            write!(f, "-")?;
        }
        if self.flags.plus {
            write!(f, "+")?;
        }
        if self.flags.space {
            write!(f, " ")?;
        }
        if self.flags.zero {
            write!(f, "0")?;
        }
        if self.flags.alt {
            write!(f, "#")?;
        }
        if let Some(w) = self.width {
            write!(f, "{}", w)?;
        }
        if let Some(p) = self.precision {
            write!(f, ".{}", p)?;
        }
        write!(f, "{}", self.conv.letter())
    }
}

/// A piece of a parsed format string.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Literal text, with `%%` already decoded to `%`.
    Literal(String),
    /// A conversion that consumes one argument.
    Conv(Spec),
}

/// One substitutable argument value.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Str(String),
    Int(i64),
    Uint(u64),
    Float(f64),
    Char(char),
}

impl From<&str> for Arg {
    fn from(v: &str) -> Self {
        Arg::Str(v.to_string())
    }
}

impl From<String> for Arg {
    fn from(v: String) -> Self {
        Arg::Str(v)
    }
}

impl From<&String> for Arg {
    fn from(v: &String) -> Self {
        Arg::Str(v.clone())
    }
}

impl From<char> for Arg {
    fn from(v: char) -> Self {
        Arg::Char(v)
    }
}

impl From<f64> for Arg {
    fn from(v: f64) -> Self {
        Arg::Float(v)
    }
}

impl From<f32> for Arg {
    fn from(v: f32) -> Self {
        Arg::Float(v as f64)
    }
}

macro_rules! arg_from_signed {
    ($($t:ty),+) => {
        $(impl From<$t> for Arg {
            fn from(v: $t) -> Self {
                Arg::Int(v as i64)
            }
        })+
    };
}

macro_rules! arg_from_unsigned {
    ($($t:ty),+) => {
        $(impl From<$t> for Arg {
            fn from(v: $t) -> Self {
                Arg::Uint(v as u64)
            }
        })+
    };
}

arg_from_signed!(i8, i16, i32, i64, isize);
arg_from_unsigned!(u8, u16, u32, u64, usize);

impl Arg {
    fn as_text(&self) -> Cow<'_, str> {
        match self {
            Arg::Str(s) => Cow::Borrowed(s.as_str()),
            Arg::Int(v) => Cow::Owned(v.to_string()),
            Arg::Uint(v) => Cow::Owned(v.to_string()),
            Arg::Float(v) => Cow::Owned(v.to_string()),
            Arg::Char(c) => Cow::Owned(c.to_string()),
        }
    }

    fn as_i64(&self) -> i64 {
        match self {
            Arg::Str(s) => s.trim().parse().unwrap_or(0),
            Arg::Int(v) => *v,
            Arg::Uint(v) => *v as i64,
            Arg::Float(v) => *v as i64,
            Arg::Char(c) => *c as i64,
        }
    }

    fn as_u64(&self) -> u64 {
        match self {
            Arg::Str(s) => s.trim().parse().unwrap_or(0),
            // Negative values wrap, as a C cast to unsigned would.
            Arg::Int(v) => *v as u64,
            Arg::Uint(v) => *v,
            Arg::Float(v) => *v as u64,
            Arg::Char(c) => *c as u64,
        }
    }

    fn as_f64(&self) -> f64 {
        match self {
            Arg::Str(s) => s.trim().parse().unwrap_or(0.0),
            Arg::Int(v) => *v as f64,
            Arg::Uint(v) => *v as f64,
            Arg::Float(v) => *v,
            Arg::Char(c) => *c as u32 as f64,
        }
    }

    fn as_char(&self) -> char {
        match self {
            Arg::Char(c) => *c,
            Arg::Str(s) => s.chars().next().unwrap_or('\u{FFFD}'),
            Arg::Int(v) => char::from_u32(*v as u32).unwrap_or('\u{FFFD}'),
            Arg::Uint(v) => char::from_u32(*v as u32).unwrap_or('\u{FFFD}'),
            Arg::Float(v) => char::from_u32(*v as u32).unwrap_or('\u{FFFD}'),
        }
    }
}

/// Errors from the substitution pass. Parsing never fails: a byte
/// sequence that is not a valid conversion is kept as literal text.
#[derive(Debug, Error, PartialEq)]
pub enum FormatError {
    #[error("format '{spec}' has no matching argument (index {index})")]
    MissingArgument { spec: Spec, index: usize },
}

fn parse_flags(input: &mut &str) -> Result<SpecFlags, ErrMode<ContextError>> {
    let mut flags = SpecFlags::default();
    while let Some(c) = opt(one_of(['-', '+', ' ', '0', '#'])).parse_next(input)? {
        match c {
            '-' => flags.minus = true,
            '+' => flags.plus = true,
            ' ' => flags.space = true,
            '0' => flags.zero = true,
            '#' => flags.alt = true,
            _ => unreachable!(),
        }
    }
    Ok(flags)
}

fn parse_conv(input: &mut &str) -> Result<Conv, ErrMode<ContextError>> {
    let c = any.parse_next(input)?;
    Ok(match c {
        'd' | 'i' => Conv::Signed,
        'u' => Conv::Unsigned,
        'o' => Conv::Octal,
        'x' => Conv::HexLower,
        'X' => Conv::HexUpper,
        'c' => Conv::Char,
        's' => Conv::Str,
        'f' => Conv::Float,
        'e' => Conv::SciLower,
        'E' => Conv::SciUpper,
        'g' => Conv::GenLower,
        'G' => Conv::GenUpper,
        _ => return Err(ErrMode::Backtrack(ContextError::default())),
    })
}

/// Parses one specification, starting just after the `%`.
fn parse_spec(input: &mut &str) -> Result<Spec, ErrMode<ContextError>> {
    let flags = parse_flags.parse_next(input)?;
    let width: Option<usize> = opt(dec_uint).parse_next(input)?;
    let precision: Option<usize> = opt(preceded('.', dec_uint)).parse_next(input)?;
    let conv = parse_conv.parse_next(input)?;
    Ok(Spec {
        flags,
        width,
        precision,
        conv,
    })
}

/// Splits a format string into literal runs and conversions.
///
/// `%%` decodes to a literal percent sign. A `%` that does not begin a
/// recognized specification is kept verbatim as literal text.
pub fn parse_format(fmt: &str) -> Vec<Segment> {
    let mut segments: Vec<Segment> = Vec::new();
    let mut literal = String::new();
    let mut input = fmt;

    while !input.is_empty() {
        match input.find('%') {
            None => {
                literal.push_str(input);
                break;
            }
            Some(at) => {
                literal.push_str(&input[..at]);
                input = &input[at..];
            }
        }

        // input starts with '%'
        let rest = &input[1..];
        if let Some(tail) = rest.strip_prefix('%') {
            literal.push('%');
            input = tail;
            continue;
        }

        let mut probe = rest;
        match parse_spec(&mut probe) {
            Ok(spec) => {
                if !literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut literal)));
                }
                segments.push(Segment::Conv(spec));
                input = probe;
            }
            Err(_) => {
                literal.push('%');
                input = rest;
            }
        }
    }

    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }
    segments
}

/// Number of argument-consuming conversions in a format string.
pub fn conversion_count(fmt: &str) -> usize {
    parse_format(fmt)
        .iter()
        .filter(|s| matches!(s, Segment::Conv(_)))
        .count()
}

/// Substitutes `args` into `fmt` in order.
///
/// Surplus arguments are ignored; a conversion with no argument left is
/// an error.
pub fn format(fmt: &str, args: &[Arg]) -> Result<String, FormatError> {
    let segments = parse_format(fmt);
    let mut out = String::with_capacity(fmt.len() + 16);
    let mut next = 0usize;

    for segment in segments {
        match segment {
            Segment::Literal(text) => out.push_str(&text),
            Segment::Conv(spec) => {
                let arg = args.get(next).ok_or(FormatError::MissingArgument {
                    spec,
                    index: next,
                })?;
                next += 1;
                render(&mut out, &spec, arg);
            }
        }
    }

    Ok(out)
}

fn render(out: &mut String, spec: &Spec, arg: &Arg) {
    match spec.conv {
        Conv::Str => {
            let text = arg.as_text();
            let truncated: Cow<'_, str> = match spec.precision {
                Some(p) if text.chars().count() > p => {
                    Cow::Owned(text.chars().take(p).collect())
                }
                _ => text,
            };
            pad(out, spec, &truncated);
        }
        Conv::Char => {
            let text = arg.as_char().to_string();
            pad(out, spec, &text);
        }
        Conv::Signed => {
            let v = arg.as_i64();
            let digits = v.unsigned_abs().to_string();
            let digits = zero_extend(digits, spec.precision);
            let sign = if v < 0 {
                "-"
            } else if spec.flags.plus {
                "+"
            } else if spec.flags.space {
                " "
            } else {
                ""
            };
            pad_number(out, spec, sign, &digits);
        }
        Conv::Unsigned | Conv::Octal | Conv::HexLower | Conv::HexUpper => {
            let v = arg.as_u64();
            let digits = match spec.conv {
                Conv::Unsigned => v.to_string(),
                Conv::Octal => format!("{:o}", v),
                Conv::HexLower => format!("{:x}", v),
                Conv::HexUpper => format!("{:X}", v),
                _ => unreachable!(),
            };
            let digits = zero_extend(digits, spec.precision);
            let prefix = if spec.flags.alt && v != 0 {
                match spec.conv {
                    Conv::Octal => "0",
                    Conv::HexLower => "0x",
                    Conv::HexUpper => "0X",
                    _ => "",
                }
            } else {
                ""
            };
            pad_number(out, spec, prefix, &digits);
        }
        Conv::Float => {
            let v = arg.as_f64();
            let p = spec.precision.unwrap_or(6);
            let body = format!("{:.*}", p, v.abs());
            let sign = float_sign(spec, v);
            pad_number(out, spec, sign, &body);
        }
        Conv::SciLower | Conv::SciUpper => {
            let v = arg.as_f64();
            let p = spec.precision.unwrap_or(6);
            let body = sci(v.abs(), p, spec.conv == Conv::SciUpper);
            let sign = float_sign(spec, v);
            pad_number(out, spec, sign, &body);
        }
        Conv::GenLower | Conv::GenUpper => {
            let v = arg.as_f64();
            let p = spec.precision.unwrap_or(6).max(1);
            let body = general(v.abs(), p, spec.conv == Conv::GenUpper);
            let sign = float_sign(spec, v);
            pad_number(out, spec, sign, &body);
        }
    }
}

fn float_sign(spec: &Spec, v: f64) -> &'static str {
    if v.is_sign_negative() {
        "-"
    } else if spec.flags.plus {
        "+"
    } else if spec.flags.space {
        " "
    } else {
        ""
    }
}

/// Minimum-digit zero extension from an explicit precision.
fn zero_extend(digits: String, precision: Option<usize>) -> String {
    match precision {
        Some(p) if digits.len() < p => {
            let mut s = "0".repeat(p - digits.len());
            s.push_str(&digits);
            s
        }
        _ => digits,
    }
}

/// Space padding for strings and chars.
fn pad(out: &mut String, spec: &Spec, body: &str) {
    let width = spec.width.unwrap_or(0);
    let len = body.chars().count();
    if len >= width {
        out.push_str(body);
        return;
    }
    let fill = width - len;
    if spec.flags.minus {
        out.push_str(body);
        out.extend(std::iter::repeat(' ').take(fill));
    } else {
        out.extend(std::iter::repeat(' ').take(fill));
        out.push_str(body);
    }
}

/// Width padding for numbers: zero fill goes between the sign/prefix
/// and the digits; an explicit precision or left adjustment disables
/// zero fill, as in C.
fn pad_number(out: &mut String, spec: &Spec, prefix: &str, body: &str) {
    let width = spec.width.unwrap_or(0);
    let len = prefix.len() + body.chars().count();
    if len >= width {
        out.push_str(prefix);
        out.push_str(body);
        return;
    }
    let fill = width - len;
    if spec.flags.minus {
        out.push_str(prefix);
        out.push_str(body);
        out.extend(std::iter::repeat(' ').take(fill));
    } else if spec.flags.zero && spec.precision.is_none() {
        out.push_str(prefix);
        out.extend(std::iter::repeat('0').take(fill));
        out.push_str(body);
    } else {
        out.extend(std::iter::repeat(' ').take(fill));
        out.push_str(prefix);
        out.push_str(body);
    }
}

/// C-style scientific notation: two-digit, signed exponent.
fn sci(v: f64, precision: usize, upper: bool) -> String {
    let formatted = format!("{:.*e}", precision, v);
    let (mantissa, exponent) = formatted
        .split_once('e')
        .unwrap_or((formatted.as_str(), "0"));
    let exp: i32 = exponent.parse().unwrap_or(0);
    let e = if upper { 'E' } else { 'e' };
    let sign = if exp < 0 { '-' } else { '+' };
    format!("{}{}{}{:02}", mantissa, e, sign, exp.abs())
}

/// C-style `%g`: fixed or scientific by exponent, trailing zeros
/// stripped.
fn general(v: f64, precision: usize, upper: bool) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    let exp = v.abs().log10().floor() as i32;
    if exp < -4 || exp >= precision as i32 {
        let s = sci(v, precision.saturating_sub(1), upper);
        let e = if upper { 'E' } else { 'e' };
        match s.split_once(e) {
            Some((mantissa, exponent)) => {
                format!("{}{}{}", strip_zeros(mantissa.to_string()), e, exponent)
            }
            None => s,
        }
    } else {
        let decimals = (precision as i32 - 1 - exp).max(0) as usize;
        strip_zeros(format!("{:.*}", decimals, v))
    }
}

fn strip_zeros(mut s: String) -> String {
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    s
}
