//! JSON summary of what a chain binned, for the pipeline's reporting layer.

use crate::record::{ChainLink, ReadHandle, ReadStore};
use chrono::{DateTime, Utc};
use serde::de::{Deserialize as DeserializeTrait, Deserializer, Error};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Read and base tallies for one group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupCounts {
    pub group: String,
    pub reads: u64,
    pub bases: u64,
}

/// Summary of one ingestion chain, ready to serialize alongside the rest
/// of the pipeline's analysis exports.
#[derive(Debug, Serialize, Deserialize)]
pub struct BinningSummary {
    pub tool_version: String,
    #[serde(serialize_with = "serialize_datetime", deserialize_with = "deserialize_datetime")]
    pub created_at: DateTime<Utc>,
    pub total_reads: u64,
    pub total_bases: u64,
    pub groups: Vec<GroupCounts>,
}

fn serialize_datetime<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&date.to_rfc3339())
}

fn deserialize_datetime<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    DateTime::parse_from_rfc3339(&s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(D::Error::custom)
}

impl BinningSummary {
    /// Tallies reads and sequence bases per group over an ingestion chain.
    ///
    /// `group_names` is the same host-owned table the renderers use; every
    /// `read.group` in the chain must index into it.
    pub fn collect(store: &ReadStore, head: Option<ReadHandle>, group_names: &[String]) -> Self {
        let mut reads = vec![0u64; group_names.len()];
        let mut bases = vec![0u64; group_names.len()];

        for handle in store.iter_chain(head, ChainLink::Ingestion) {
            if let Some(read) = store.get(handle) {
                let g = read.group as usize;
                reads[g] += 1;
                bases[g] += read.seq.as_deref().map(str::len).unwrap_or(0) as u64;
            }
        }

        let groups: Vec<GroupCounts> = group_names
            .iter()
            .zip(reads.iter().zip(bases.iter()))
            .map(|(name, (&reads, &bases))| GroupCounts {
                group: name.clone(),
                reads,
                bases,
            })
            .collect();

        BinningSummary {
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            created_at: Utc::now(),
            total_reads: reads.iter().sum(),
            total_bases: bases.iter().sum(),
            groups,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn write_json<W: Write>(&self, writer: &mut W) -> anyhow::Result<()> {
        serde_json::to_writer_pretty(&mut *writer, self)?;
        writer.write_all(b"\n")?;
        Ok(())
    }
}
