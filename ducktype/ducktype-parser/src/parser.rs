//! The type-string grammar.
//!
//! A backtracking recursive-descent grammar over nom combinators. Every
//! token matcher skips arbitrary leading whitespace and fails without
//! consuming input, so alternations can retry from the same position. The
//! scalar alternation is driven by the declared table in
//! [`crate::keywords`] rather than an inline combinator chain.

use ducktype_core::{DataType, StructField};
use nom::{
    Finish, IResult,
    branch::alt,
    bytes::complete::{tag, tag_no_case},
    character::complete::{alpha1, alphanumeric1, char, digit1, multispace0, multispace1},
    combinator::{all_consuming, map_res, opt, recognize},
    error::{Error, ErrorKind},
    multi::{many0, many1, separated_list1},
    sequence::{delimited, pair, preceded, separated_pair, terminated},
};

use crate::{error::ParseError, keywords::SCALAR_GROUPS};

/// Precision/scale substituted when `decimal`/`numeric` appears without a
/// parenthesized parameter pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecimalDefaults {
    pub precision: u32,
    pub scale: u32,
}

impl DecimalDefaults {
    pub fn new(precision: u32, scale: u32) -> Self {
        Self { precision, scale }
    }
}

impl Default for DecimalDefaults {
    fn default() -> Self {
        Self {
            precision: 18,
            scale: 3,
        }
    }
}

/// Parse a catalog type string with the historical `(18, 3)` decimal
/// defaults.
pub fn parse_type(text: &str) -> Result<DataType, ParseError> {
    parse_type_with_defaults(text, DecimalDefaults::default())
}

/// Parse a catalog type string into a [`DataType`].
///
/// The entire input must be consumed: trailing whitespace is tolerated,
/// trailing non-whitespace is an error.
pub fn parse_type_with_defaults(
    text: &str,
    defaults: DecimalDefaults,
) -> Result<DataType, ParseError> {
    let result =
        all_consuming(terminated(move |i| type_expr(i, defaults), multispace0))(text).finish();
    match result {
        Ok((_, data_type)) => Ok(data_type),
        Err(e) => Err(ParseError::from_unconsumed(text, e.input)),
    }
}

/// Full type production: the bracket-suffix array form first, then the
/// unsuffixed alternation.
fn type_expr(input: &str, defaults: DecimalDefaults) -> IResult<&str, DataType> {
    alt((
        move |i| array_suffixed(i, defaults),
        move |i| base_type(i, defaults),
    ))(input)
}

/// Non-array alternation: scalar, decimal, map or struct.
fn base_type(input: &str, defaults: DecimalDefaults) -> IResult<&str, DataType> {
    alt((
        scalar_type,
        move |i| decimal_type(i, defaults),
        move |i| map_type(i, defaults),
        move |i| struct_type(i, defaults),
    ))(input)
}

/// A non-array base followed by one or more `[]` suffixes, each wrapping
/// the accumulated type one level deeper (innermost is the base).
fn array_suffixed(input: &str, defaults: DecimalDefaults) -> IResult<&str, DataType> {
    let (input, base) = base_type(input, defaults)?;
    let (input, suffixes) = many1(bracket_pair)(input)?;
    let data_type = suffixes
        .into_iter()
        .fold(base, |element, ()| DataType::Array(Box::new(element)));
    Ok((input, data_type))
}

/// First-match-wins over the declared alias table.
fn scalar_type(input: &str) -> IResult<&str, DataType> {
    for (aliases, kind) in SCALAR_GROUPS {
        for &alias in *aliases {
            if let Ok((rest, ())) = keyword(alias)(input) {
                return Ok((rest, kind.data_type()));
            }
        }
    }
    Err(nom::Err::Error(Error::new(input, ErrorKind::Alt)))
}

/// `decimal`/`numeric` with an optional `(precision, scale)` pair; absent
/// parameters take the caller-supplied defaults. No range validation here.
fn decimal_type(input: &str, defaults: DecimalDefaults) -> IResult<&str, DataType> {
    let (input, ()) = alt((keyword("decimal"), keyword("numeric")))(input)?;
    let (input, params) = opt(delimited(
        punct('('),
        separated_pair(integer, punct(','), integer),
        punct(')'),
    ))(input)?;
    let (precision, scale) = params.unwrap_or((defaults.precision, defaults.scale));
    Ok((input, DataType::Decimal { precision, scale }))
}

/// `map(key, value)`. Keys come from the scalar alternation only; decimal,
/// map, array and struct keys are rejected by the grammar.
fn map_type(input: &str, defaults: DecimalDefaults) -> IResult<&str, DataType> {
    let (input, ()) = keyword("map")(input)?;
    let (input, _) = punct('(')(input)?;
    let (input, key) = scalar_type(input)?;
    let (input, _) = punct(',')(input)?;
    let (input, value) = type_expr(input, defaults)?;
    let (input, _) = punct(')')(input)?;
    Ok((
        input,
        DataType::Map {
            key: Box::new(key),
            value: Box::new(value),
        },
    ))
}

/// `struct(name type, ...)` with at least one field. Declaration order is
/// preserved and duplicate names are kept as-is.
fn struct_type(input: &str, defaults: DecimalDefaults) -> IResult<&str, DataType> {
    let (input, ()) = keyword("struct")(input)?;
    let (input, _) = punct('(')(input)?;
    let (input, fields) = separated_list1(punct(','), move |i| struct_field(i, defaults))(input)?;
    let (input, _) = punct(')')(input)?;
    Ok((input, DataType::Struct(fields.into())))
}

fn struct_field(input: &str, defaults: DecimalDefaults) -> IResult<&str, StructField> {
    let (input, name) = preceded(multispace0, identifier)(input)?;
    let (input, data_type) = type_expr(input, defaults)?;
    Ok((input, StructField::new(name, data_type)))
}

/// Match one keyword alias, case-insensitively, skipping leading whitespace.
///
/// Multi-word aliases (`"timestamp with time zone"`) accept arbitrary
/// whitespace between words. The match must end at an identifier boundary,
/// so an alias never consumes a proper prefix of a longer identifier.
fn keyword<'a>(alias: &'static str) -> impl Fn(&'a str) -> IResult<&'a str, ()> {
    move |input: &'a str| {
        let (mut rest, _) = multispace0(input)?;
        for (idx, word) in alias.split(' ').enumerate() {
            if idx > 0 {
                let (r, _) = multispace1(rest)?;
                rest = r;
            }
            let (r, _) = tag_no_case(word)(rest)?;
            rest = r;
        }
        keyword_boundary(rest)
    }
}

fn keyword_boundary(input: &str) -> IResult<&str, ()> {
    if input.chars().next().is_some_and(is_ident_continue) {
        return Err(nom::Err::Error(Error::new(input, ErrorKind::Verify)));
    }
    Ok((input, ()))
}

fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Parse an identifier (alphanumeric + underscore, must start with alpha
/// or `_`).
fn identifier(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        alt((alpha1, tag("_"))),
        many0(alt((alphanumeric1, tag("_")))),
    ))(input)
}

/// Non-negative integer literal, leading whitespace tolerated.
fn integer(input: &str) -> IResult<&str, u32> {
    preceded(multispace0, map_res(digit1, str::parse))(input)
}

fn punct<'a>(expected: char) -> impl Fn(&'a str) -> IResult<&'a str, char> {
    move |input| preceded(multispace0, char(expected))(input)
}

fn bracket_pair(input: &str) -> IResult<&str, ()> {
    let (input, _) = punct('[')(input)?;
    let (input, _) = punct(']')(input)?;
    Ok((input, ()))
}
