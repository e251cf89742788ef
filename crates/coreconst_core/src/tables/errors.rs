//! Error codes returned by engine APIs. Codes are contiguous, starting at `OK = 0`.

use crate::groups::EnumGroup;
use crate::record::ConstantDef;

pub const ERRORS: &[ConstantDef] = &[
    error("OK", 0),
    error("FAILED", 1),
    error("ERR_UNAVAILABLE", 2),
    error("ERR_UNCONFIGURED", 3),
    error("ERR_UNAUTHORIZED", 4),
    error("ERR_PARAMETER_RANGE_ERROR", 5),
    error("ERR_OUT_OF_MEMORY", 6),
    error("ERR_FILE_NOT_FOUND", 7),
    error("ERR_FILE_BAD_DRIVE", 8),
    error("ERR_FILE_BAD_PATH", 9),
    error("ERR_FILE_NO_PERMISSION", 10),
    error("ERR_FILE_ALREADY_IN_USE", 11),
    error("ERR_FILE_CANT_OPEN", 12),
    error("ERR_FILE_CANT_WRITE", 13),
    error("ERR_FILE_CANT_READ", 14),
    error("ERR_FILE_UNRECOGNIZED", 15),
    error("ERR_FILE_CORRUPT", 16),
    error("ERR_FILE_MISSING_DEPENDENCIES", 17),
    error("ERR_FILE_EOF", 18),
    error("ERR_CANT_OPEN", 19),
    error("ERR_CANT_CREATE", 20),
    error("ERR_QUERY_FAILED", 21),
    error("ERR_ALREADY_IN_USE", 22),
    error("ERR_LOCKED", 23),
    error("ERR_TIMEOUT", 24),
    error("ERR_CANT_CONNECT", 25),
    error("ERR_CANT_RESOLVE", 26),
    error("ERR_CONNECTION_ERROR", 27),
    error("ERR_CANT_ACQUIRE_RESOURCE", 28),
    error("ERR_CANT_FORK", 29),
    error("ERR_INVALID_DATA", 30),
    error("ERR_INVALID_PARAMETER", 31),
    error("ERR_ALREADY_EXISTS", 32),
    error("ERR_DOES_NOT_EXIST", 33),
    error("ERR_DATABASE_CANT_READ", 34),
    error("ERR_DATABASE_CANT_WRITE", 35),
    error("ERR_COMPILATION_FAILED", 36),
    error("ERR_METHOD_NOT_FOUND", 37),
    error("ERR_LINK_FAILED", 38),
    error("ERR_SCRIPT_FAILED", 39),
    error("ERR_CYCLIC_LINK", 40),
    error("ERR_INVALID_DECLARATION", 41),
    error("ERR_DUPLICATE_SYMBOL", 42),
    error("ERR_PARSE_ERROR", 43),
    error("ERR_BUSY", 44),
    error("ERR_SKIP", 45),
    error("ERR_HELP", 46),
    error("ERR_BUG", 47),
    error("ERR_PRINTER_ON_FIRE", 48),
];

const fn error(name: &'static str, value: i64) -> ConstantDef {
    ConstantDef::member(EnumGroup::Error, name, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_contiguous() {
        for (i, def) in ERRORS.iter().enumerate() {
            assert_eq!(def.value, i as i64, "{} out of sequence", def.name);
        }
    }
}
