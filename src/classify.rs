//! Pairing-role classification and its fixed status-tag table.
//!
//! Every binned read carries a small role code describing how it relates to
//! its mate and to successful alignment. The tag emitted for a read is a
//! fixed 11-character string of the form `p_<R><m>_<M><m>_<G><m>;` chosen by
//! the role crossed with the paired/unpaired presentation mode.

use crate::error::BinError;

/// How a read relates to its mate and to successful alignment.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PairRole {
    /// First read of a properly mapped pair
    FIR,
    /// Second read of a properly mapped pair
    SEC,
    /// Mapped singleton that was the first of its pair
    SNGL_FIR,
    /// Mapped singleton that was the second of its pair
    SNGL_SEC,
    /// Mapped read with no pairing at all
    SNGL,
    /// Unmapped or otherwise errored read
    ERR,
}

impl TryFrom<u8> for PairRole {
    type Error = BinError;

    fn try_from(code: u8) -> Result<Self, BinError> {
        match code {
            0 => Ok(PairRole::FIR),
            1 => Ok(PairRole::SEC),
            2 => Ok(PairRole::SNGL_FIR),
            3 => Ok(PairRole::SNGL_SEC),
            4 => Ok(PairRole::SNGL),
            5 => Ok(PairRole::ERR),
            _ => Err(BinError::InvalidRoleCode(code)),
        }
    }
}

// role x {unpaired, paired} presentation mode
const STATUS_TAGS: [[&str; 2]; 6] = [
    ["p_PR_PM_UG;", "p_PR_PM_PG;"], // FIR
    ["p_PR_PM_UG;", "p_PR_PM_PG;"], // SEC
    ["p_PR_UM_NG;", "p_PR_EM_NG;"], // SNGL_FIR
    ["p_PR_UM_NG;", "p_PR_EM_NG;"], // SNGL_SEC
    ["p_UR_NM_NG;", "p_UR_EM_NG;"], // SNGL
    ["p_ER_NM_NG;", "p_ER_NM_NG;"], // ERR
];

/// Returns the status tag for a role under the given presentation mode.
pub fn status_tag(role: PairRole, paired_output: bool) -> &'static str {
    STATUS_TAGS[role as usize][paired_output as usize]
}

/// Classifies a raw role code as carried on an alignment record.
///
/// Codes outside the table fail with [`BinError::InvalidRoleCode`] rather
/// than being read out of bounds.
pub fn status_tag_for_code(code: u8, paired_output: bool) -> Result<&'static str, BinError> {
    Ok(status_tag(PairRole::try_from(code)?, paired_output))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_tag_table() {
        let cases = vec![
            (PairRole::FIR, "p_PR_PM_UG;", "p_PR_PM_PG;"),
            (PairRole::SEC, "p_PR_PM_UG;", "p_PR_PM_PG;"),
            (PairRole::SNGL_FIR, "p_PR_UM_NG;", "p_PR_EM_NG;"),
            (PairRole::SNGL_SEC, "p_PR_UM_NG;", "p_PR_EM_NG;"),
            (PairRole::SNGL, "p_UR_NM_NG;", "p_UR_EM_NG;"),
            (PairRole::ERR, "p_ER_NM_NG;", "p_ER_NM_NG;"),
        ];

        for (role, unpaired, paired) in cases {
            assert_eq!(status_tag(role, false), unpaired, "{:?} unpaired", role);
            assert_eq!(status_tag(role, true), paired, "{:?} paired", role);
        }
    }

    #[test]
    fn test_tags_are_fixed_width() {
        for role in [
            PairRole::FIR,
            PairRole::SEC,
            PairRole::SNGL_FIR,
            PairRole::SNGL_SEC,
            PairRole::SNGL,
            PairRole::ERR,
        ] {
            assert_eq!(status_tag(role, false).len(), 11);
            assert_eq!(status_tag(role, true).len(), 11);
        }
    }

    #[test]
    fn test_raw_code_boundary() {
        assert_eq!(status_tag_for_code(0, true).unwrap(), "p_PR_PM_PG;");
        assert_eq!(status_tag_for_code(5, false).unwrap(), "p_ER_NM_NG;");

        for code in [6u8, 7, 42, 255] {
            assert_eq!(
                status_tag_for_code(code, true),
                Err(BinError::InvalidRoleCode(code))
            );
            assert_eq!(
                status_tag_for_code(code, false),
                Err(BinError::InvalidRoleCode(code))
            );
        }
    }

    #[test]
    fn test_role_from_code_round_trip() {
        for code in 0u8..6 {
            let role = PairRole::try_from(code).unwrap();
            assert_eq!(role as u8, code);
        }
    }
}
