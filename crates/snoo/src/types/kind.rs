//! Thing kind discriminators.

use std::fmt;

/// The type prefix Reddit puts on every thing, e.g. `t3` for links.
///
/// A fullname is a kind followed by an underscore and a base-36 id, such as
/// `t3_15bfi0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// `t1`
    Comment,
    /// `t2`
    Account,
    /// `t3`
    Link,
    /// `t4`
    Message,
    /// `t5`
    Subreddit,
    /// `t6`
    Award,
}

impl Kind {
    /// The tag as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Comment => "t1",
            Kind::Account => "t2",
            Kind::Link => "t3",
            Kind::Message => "t4",
            Kind::Subreddit => "t5",
            Kind::Award => "t6",
        }
    }

    /// Parse a wire tag. Returns `None` for tags this crate does not know.
    pub fn from_tag(tag: &str) -> Option<Kind> {
        match tag {
            "t1" => Some(Kind::Comment),
            "t2" => Some(Kind::Account),
            "t3" => Some(Kind::Link),
            "t4" => Some(Kind::Message),
            "t5" => Some(Kind::Subreddit),
            "t6" => Some(Kind::Award),
            _ => None,
        }
    }

    /// Read the kind from a fullname such as `t3_15bfi0`.
    ///
    /// ```
    /// use snoo::Kind;
    ///
    /// assert_eq!(Kind::from_fullname("t1_abc"), Some(Kind::Comment));
    /// assert_eq!(Kind::from_fullname("abc"), None);
    /// ```
    pub fn from_fullname(fullname: &str) -> Option<Kind> {
        let (tag, id) = fullname.split_once('_')?;
        if id.is_empty() {
            return None;
        }
        Kind::from_tag(tag)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_round_trip() {
        for kind in [
            Kind::Comment,
            Kind::Account,
            Kind::Link,
            Kind::Message,
            Kind::Subreddit,
            Kind::Award,
        ] {
            assert_eq!(Kind::from_tag(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn unknown_tags() {
        assert_eq!(Kind::from_tag("t9"), None);
        assert_eq!(Kind::from_tag("Listing"), None);
        assert_eq!(Kind::from_tag(""), None);
    }

    #[test]
    fn fullnames() {
        assert_eq!(Kind::from_fullname("t5_2qh1i"), Some(Kind::Subreddit));
        assert_eq!(Kind::from_fullname("t3_"), None);
        assert_eq!(Kind::from_fullname("more_abc"), None);
    }
}
