use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identifier namespace used to name sequences within an assembly
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provider {
    /// UCSC display names: chr1, chr2, ..., chrX, chrM
    Ucsc,
    /// NCBI sequence names: 1, 2, ..., X, MT
    Ncbi,
    /// GenBank accessions: CM000663.2, KI270706.1, ...
    Genbank,
    /// RefSeq accessions: NC_000001.11, NT_187361.1, ...
    Refseq,
}

/// The recognized providers, in the order equivalence tables list them
pub const ALL_PROVIDERS: [Provider; 4] = [
    Provider::Ucsc,
    Provider::Ncbi,
    Provider::Genbank,
    Provider::Refseq,
];

impl Provider {
    /// Parse a caller-supplied provider token.
    ///
    /// Matching is exact: the recognized tokens are `ucsc`, `ncbi`,
    /// `genbank`, and `refseq`.
    pub fn parse(token: &str) -> Result<Self, UnknownProvider> {
        match token {
            "ucsc" => Ok(Self::Ucsc),
            "ncbi" => Ok(Self::Ncbi),
            "genbank" => Ok(Self::Genbank),
            "refseq" => Ok(Self::Refseq),
            _ => Err(UnknownProvider {
                token: token.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ucsc => write!(f, "ucsc"),
            Self::Ncbi => write!(f, "ncbi"),
            Self::Genbank => write!(f, "genbank"),
            Self::Refseq => write!(f, "refseq"),
        }
    }
}

/// A provider token outside the recognized enumeration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("'{token}' is not a valid provider! Valid providers are 'ucsc', 'ncbi', 'genbank', 'refseq'")]
pub struct UnknownProvider {
    pub token: String,
}

/// A free-form assembly report field: text or a numeric statistic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetadataValue {
    Number(f64),
    Text(String),
}

impl MetadataValue {
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Number(_) => None,
        }
    }

    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(_) => None,
        }
    }
}

impl std::fmt::Display for MetadataValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}
