// std imports
use std::{
    fmt,
    ops::{BitOr, BitOrAssign, Deref},
    str::FromStr,
};

// third-party imports
use enumset::{EnumSet, EnumSetType, enum_set};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

// local imports
use crate::error::{Error, Result};

// ---

/// A single matching flag.
///
/// Bit values follow the conventional `FNM_*` constants, see [`Flags::bits`].
#[derive(EnumSetType, Debug, Hash, Display, EnumString, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Flag {
    /// Treat `\` as an ordinary character.
    NoEscape,
    /// Do not let wildcards match `/`, and enable `**/` recursive descent.
    PathName,
    /// Let wildcards match a leading `.`.
    DotMatch,
    /// Compare ASCII letters case-insensitively.
    CaseFold,
    /// Expand `{a,b}` alternatives.
    ExtGlob,
}

// ---

/// A set of [`Flag`] values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Flags(EnumSet<Flag>);

impl Flags {
    pub const NOESCAPE: Self = Self(enum_set!(Flag::NoEscape));
    pub const PATHNAME: Self = Self(enum_set!(Flag::PathName));
    pub const DOTMATCH: Self = Self(enum_set!(Flag::DotMatch));
    pub const CASEFOLD: Self = Self(enum_set!(Flag::CaseFold));
    pub const EXTGLOB: Self = Self(enum_set!(Flag::ExtGlob));

    pub const fn empty() -> Self {
        Self(EnumSet::empty())
    }

    pub const fn all() -> Self {
        Self(EnumSet::all())
    }

    /// Creates a flag set from a bitmask, ignoring unknown bits.
    ///
    /// ```
    /// use fnmatch::Flags;
    ///
    /// assert_eq!(Flags::from_bits(0x0a), Flags::PATHNAME | Flags::CASEFOLD);
    /// assert_eq!(Flags::from_bits(0x100), Flags::empty());
    /// ```
    pub fn from_bits(bits: u32) -> Self {
        Self(EnumSet::from_u32_truncated(bits))
    }

    /// Returns the bitmask, `NOESCAPE` is `0x01`, `PATHNAME` is `0x02`, `DOTMATCH` is `0x04`,
    /// `CASEFOLD` is `0x08` and `EXTGLOB` is `0x10`.
    pub fn bits(&self) -> u32 {
        self.0.as_u32()
    }

    #[cfg(feature = "clap")]
    pub const fn clap_parser() -> ClapParser {
        ClapParser
    }
}

impl Deref for Flags {
    type Target = EnumSet<Flag>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<EnumSet<Flag>> for Flags {
    fn from(set: EnumSet<Flag>) -> Self {
        Self(set)
    }
}

impl From<Flag> for Flags {
    fn from(flag: Flag) -> Self {
        Self(flag.into())
    }
}

impl From<Flags> for EnumSet<Flag> {
    fn from(flags: Flags) -> Self {
        flags.0
    }
}

impl FromIterator<Flag> for Flags {
    fn from_iter<I: IntoIterator<Item = Flag>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<T: Into<Flags>> BitOr<T> for Flags {
    type Output = Self;

    fn bitor(self, rhs: T) -> Self {
        Self(self.0 | rhs.into().0)
    }
}

impl<T: Into<Flags>> BitOrAssign<T> for Flags {
    fn bitor_assign(&mut self, rhs: T) {
        self.0 |= rhs.into().0;
    }
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut first = true;
        for flag in self.0.iter() {
            if first {
                first = false;
            } else {
                write!(f, ",")?;
            }
            write!(f, "{}", flag)?;
        }
        Ok(())
    }
}

/// Parses a comma-separated list of flag names or a numeric bitmask.
///
/// ```
/// use fnmatch::Flags;
///
/// assert_eq!("pathname, casefold".parse::<Flags>(), Ok(Flags::PATHNAME | Flags::CASEFOLD));
/// assert_eq!("FNM_DOTMATCH".parse::<Flags>(), Ok(Flags::DOTMATCH));
/// assert_eq!("0x12".parse::<Flags>(), Ok(Flags::PATHNAME | Flags::EXTGLOB));
/// assert_eq!("".parse::<Flags>(), Ok(Flags::empty()));
/// ```
impl FromStr for Flags {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Some(bits) = parse_bits(s) {
            return Ok(Self::from_bits(bits));
        }

        let mut set = EnumSet::new();
        for item in s.split(',').map(str::trim).filter(|x| !x.is_empty()) {
            let flag = Flag::from_str(strip_prefix(item)).map_err(|_| Error::UnknownFlag(item.to_owned()))?;
            set.insert(flag);
        }
        Ok(Self(set))
    }
}

fn parse_bits(s: &str) -> Option<u32> {
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        u32::from_str_radix(hex, 16).ok()
    } else if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
        s.parse().ok()
    } else {
        None
    }
}

fn strip_prefix(name: &str) -> &str {
    match name.get(..4) {
        Some(prefix) if prefix.eq_ignore_ascii_case("fnm_") || prefix.eq_ignore_ascii_case("fnm-") => &name[4..],
        _ => name,
    }
}

// ---

#[cfg(feature = "serde")]
impl serde::Serialize for Flags {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Flags {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(FlagsVisitor)
    }
}

#[cfg(feature = "serde")]
struct FlagsVisitor;

#[cfg(feature = "serde")]
impl<'de> serde::de::Visitor<'de> for FlagsVisitor {
    type Value = Flags;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a list of flag names, a comma-separated list of flag names or a numeric bitmask")
    }

    fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut flags = Flags::empty();
        while let Some(value) = seq.next_element::<String>()? {
            flags |= value.parse::<Flags>().map_err(serde::de::Error::custom)?;
        }
        Ok(flags)
    }

    fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        value.parse().map_err(E::custom)
    }

    fn visit_u64<E>(self, value: u64) -> std::result::Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        u32::try_from(value)
            .map(Flags::from_bits)
            .map_err(|_| E::invalid_value(serde::de::Unexpected::Unsigned(value), &self))
    }

    fn visit_i64<E>(self, value: i64) -> std::result::Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        u32::try_from(value)
            .map(Flags::from_bits)
            .map_err(|_| E::invalid_value(serde::de::Unexpected::Signed(value), &self))
    }

    fn visit_unit<E>(self) -> std::result::Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Flags::empty())
    }
}

// ---

/// Command line value parser for [`Flags`].
#[cfg(feature = "clap")]
#[derive(Debug, Clone, Copy, Default)]
pub struct ClapParser;

#[cfg(feature = "clap")]
impl clap::builder::TypedValueParser for ClapParser {
    type Value = Flags;

    fn parse_ref(
        &self,
        cmd: &clap::Command,
        arg: Option<&clap::Arg>,
        value: &std::ffi::OsStr,
    ) -> std::result::Result<Self::Value, clap::Error> {
        clap::builder::StringValueParser::new()
            .parse_ref(cmd, arg, value)
            .and_then(|s| {
                s.parse::<Flags>().map_err(|err| {
                    let item = match err {
                        Error::UnknownFlag(item) => item,
                        _ => s.clone(),
                    };
                    clap::builder::PossibleValuesParser::new(self.possible_values().into_iter().flatten())
                        .parse_ref(cmd, arg, std::ffi::OsStr::new(&item))
                        .err()
                        .unwrap_or_else(|| clap::Error::new(clap::error::ErrorKind::InvalidValue).with_cmd(cmd))
                })
            })
    }

    fn possible_values(&self) -> Option<Box<dyn Iterator<Item = clap::builder::PossibleValue> + '_>> {
        use strum::IntoEnumIterator;

        Some(Box::new(
            Flag::iter().map(|flag| clap::builder::PossibleValue::new(<&'static str>::from(flag))),
        ))
    }
}
