//! The built-in "safe" profile
//! ===========================
//!
//! This is the fixed set of substitutions applied when a caller asks for a
//! default table. It is plain constant data: every [`Table`] copies it into
//! its own slots at construction and never refers back to it, so nothing a
//! caller does to one table can leak into another.
//!
//! The profile sorts the ASCII range into three groups:
//!
//!   1. `&` gets a semantic substitution, `_and_`, so that "Tom & Jerry"
//!      keeps reading as such.
//!
//!   2. Characters a shell or a filesystem treats specially (quotes, globs,
//!      redirections, separators, whitespace) and every C0 control byte plus
//!      DEL are replaced by the generic marker `_`.
//!
//!   3. Paired grouping characters, `{}()[]`, are replaced by `-`, keeping
//!      a visible hint that something structural used to be there.
//!
//! Everything else passes through: letters, digits, the harmless punctuation
//! `# % + ~ , - _ ^ . =` and the whole high half of the byte range. The
//! high half is where the bytes of multi-byte encodings live, and leaving it
//! alone keeps those sequences intact without having to decode them.
//!
//! [`Table`]: crate::Table

pub const AMPERSAND_MARKER: &str = "_and_";
pub const GENERIC_MARKER: &str = "_";
pub const BRACKET_MARKER: &str = "-";

const ASCII_DEL: u8 = 0x7f;
const FIRST_PRINTABLE: u8 = 0x20;

const GENERIC_PUNCTUATION: [u8; 14] = [
    b'<', b'>', b'\\', b'`', b'|', b':', b'@', b'$', b'"', b'!', b'?', b';', b'\'', b' ',
];

const BRACKET_PUNCTUATION: [u8; 6] = [b'{', b'}', b'(', b')', b'[', b']'];

/// One slot per byte value; `None` means the byte passes through.
pub const SAFE_PROFILE: [Option<&str>; 256] = safe_profile();

const fn safe_profile() -> [Option<&'static str>; 256] {
    let mut slots: [Option<&'static str>; 256] = [None; 256];

    let mut b = 0;
    while b < FIRST_PRINTABLE as usize {
        slots[b] = Some(GENERIC_MARKER);
        b += 1;
    }
    slots[ASCII_DEL as usize] = Some(GENERIC_MARKER);

    let mut i = 0;
    while i < GENERIC_PUNCTUATION.len() {
        slots[GENERIC_PUNCTUATION[i] as usize] = Some(GENERIC_MARKER);
        i += 1;
    }

    let mut i = 0;
    while i < BRACKET_PUNCTUATION.len() {
        slots[BRACKET_PUNCTUATION[i] as usize] = Some(BRACKET_MARKER);
        i += 1;
    }

    slots[b'&' as usize] = Some(AMPERSAND_MARKER);
    slots
}

// 32 C0 controls, DEL, the listed punctuation and the ampersand.
const N_PROFILE_ENTRIES: usize = 32 + 1 + GENERIC_PUNCTUATION.len() + BRACKET_PUNCTUATION.len() + 1;
const_assert_eq!(N_PROFILE_ENTRIES, 54);
const_assert_eq!(SAFE_PROFILE.len(), 256);

pub(crate) const fn profile_entries() -> usize {
    let mut n = 0;
    let mut b = 0;
    while b < SAFE_PROFILE.len() {
        if SAFE_PROFILE[b].is_some() {
            n += 1;
        }
        b += 1;
    }
    n
}

// Catches a punctuation byte listed twice, or a listed byte that is also a
// control byte.
const_assert_eq!(profile_entries(), N_PROFILE_ENTRIES);
