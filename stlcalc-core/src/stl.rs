//! ASCII STL facet parser.
//!
//! The parser is line oriented and deliberately lenient. Only lines whose
//! trimmed text starts with `facet` or `vertex` carry data; everything else
//! (`solid`, `outer loop`, `endloop`, `endfacet`, `endsolid`, blank lines)
//! is ignored. The last three whitespace-separated tokens of a data line are
//! its coordinates. Every four coordinate triples, in file order, make one
//! facet: the normal from the `facet normal` line, then three vertices.
//!
//! ```text
//! solid name
//!   facet normal ni nj nk
//!     outer loop
//!       vertex v1x v1y v1z
//!       vertex v2x v2y v2z
//!       vertex v3x v3y v3z
//!     endloop
//!   endfacet
//! endsolid name
//! ```
//!
//! A data line whose coordinates do not parse is dropped on its own, and a
//! trailing group of fewer than four triples is discarded at end of input.
use nom::{
    branch::alt,
    bytes::complete::{tag, tag_no_case},
    character::complete::one_of,
    combinator::{all_consuming, map_res, opt, recognize, value},
    number::complete::double,
    sequence::pair,
    IResult,
};
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use tracing::{debug, trace};

use crate::error::{StlError, StlResult};
use crate::geometry::{Facet, Mesh};

/// Coordinate triples per facet: normal + three vertices.
const TRIPLES_PER_FACET: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Keyword {
    Facet,
    Vertex,
}

/// Counters collected while parsing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseStats {
    /// Lines starting with `facet` or `vertex`.
    pub relevant_lines: usize,
    /// Relevant lines dropped because their coordinates did not parse.
    pub skipped_lines: usize,
    /// Triples left in the staging buffer at end of input.
    pub dropped_trailing: usize,
}

fn keyword(input: &str) -> IResult<&str, Keyword> {
    alt((
        value(Keyword::Facet, tag("facet")),
        value(Keyword::Vertex, tag("vertex")),
    ))(input)
}

/// Signed `inf`, `infinity` or `nan` in any case.
fn special_float(input: &str) -> IResult<&str, f64> {
    map_res(
        recognize(pair(
            opt(one_of("+-")),
            alt((
                tag_no_case("infinity"),
                tag_no_case("inf"),
                tag_no_case("nan"),
            )),
        )),
        str::parse::<f64>,
    )(input)
}

fn coordinate(token: &str) -> IResult<&str, f64> {
    all_consuming(alt((special_float, double)))(token)
}

/// Split text into lines on `\n`, `\r\n` or a lone `\r`.
///
/// A `\r\n` pair yields an extra empty line, which the parser ignores.
fn text_lines(input: &str) -> impl Iterator<Item = &str> {
    input.split(|c| c == '\n' || c == '\r')
}

/// Last three whitespace-separated tokens of `line` as floats.
///
/// The keyword itself counts as a token, so `vertex 1 2` yields `None`.
fn trailing_triple(line: &str) -> Option<[f64; 3]> {
    let mut tokens = line.split_whitespace().rev();
    let z = tokens.next()?;
    let y = tokens.next()?;
    let x = tokens.next()?;
    let (_, x) = coordinate(x).ok()?;
    let (_, y) = coordinate(y).ok()?;
    let (_, z) = coordinate(z).ok()?;
    Some([x, y, z])
}

/// Incremental facet assembler fed one line at a time.
#[derive(Debug, Default)]
struct FacetParser {
    staging: Vec<[f64; 3]>,
    mesh: Mesh,
    stats: ParseStats,
}

impl FacetParser {
    fn new() -> Self {
        Self {
            staging: Vec::with_capacity(TRIPLES_PER_FACET),
            ..Self::default()
        }
    }

    fn feed_line(&mut self, line: &str) {
        let line = line.trim();
        let Ok((_, kind)) = keyword(line) else {
            return;
        };
        self.stats.relevant_lines += 1;

        let Some(triple) = trailing_triple(line) else {
            trace!(?kind, line, "skipping line with unparseable coordinates");
            self.stats.skipped_lines += 1;
            return;
        };

        self.staging.push(triple);
        if let [n, a, b, c] = self.staging[..] {
            self.mesh.add_facet(Facet::from_triples([n, a, b, c]));
            self.staging.clear();
        }
    }

    fn finish(mut self) -> (Mesh, ParseStats) {
        if !self.staging.is_empty() {
            debug!(
                triples = self.staging.len(),
                "dropping incomplete facet at end of input"
            );
            self.stats.dropped_trailing = self.staging.len();
        }
        debug!(
            facets = self.mesh.len(),
            relevant_lines = self.stats.relevant_lines,
            skipped_lines = self.stats.skipped_lines,
            "parsed ASCII STL"
        );
        (self.mesh, self.stats)
    }
}

/// Parse ASCII STL text. Never fails; see the module docs for what is skipped.
pub fn parse_ascii_stl(input: &str) -> Mesh {
    parse_ascii_stl_with_stats(input).0
}

/// Parse ASCII STL text and report how many lines were used or skipped.
pub fn parse_ascii_stl_with_stats(input: &str) -> (Mesh, ParseStats) {
    let mut parser = FacetParser::new();
    for line in text_lines(input) {
        parser.feed_line(line);
    }
    parser.finish()
}

/// Parse ASCII STL from a reader.
///
/// Only reader failures are errors, including text that is not valid UTF-8.
pub fn read_ascii_stl<R: BufRead>(mut reader: R) -> std::io::Result<Mesh> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(parse_ascii_stl(&text))
}

/// Load an ASCII STL file from disk.
///
/// The file is closed before this returns, whether or not reading succeeded.
///
/// # Errors
///
/// Returns [`StlError::Io`] if the file cannot be opened or read.
pub fn load_stl<P: AsRef<Path>>(path: P) -> StlResult<Mesh> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| StlError::io(path, e))?;
    read_ascii_stl(BufReader::new(file)).map_err(|e| StlError::io(path, e))
}
