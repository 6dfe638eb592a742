//! IPv4/IPv6 CIDR block utilities.
//!
//! Provides [`CidrBlock`] for representing a network address with a prefix
//! length in either address family, with the containment and sibling-merge
//! checks used by the summarizer. Addresses are handled as `u128` so both
//! families share one code path; IPv4 values simply occupy the low 32 bits.

use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;
use thiserror::Error;

/// Maximum prefix length for an IPv4 block (32 bits).
pub const MAX_LENGTH_V4: u8 = 32;
/// Maximum prefix length for an IPv6 block (128 bits).
pub const MAX_LENGTH_V6: u8 = 128;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CidrError {
    #[error("invalid IP address: {0}")]
    InvalidAddress(String),

    #[error("invalid prefix length: {0}")]
    InvalidLength(String),

    #[error("prefix length /{len} is too long for {addr} (max /{max})")]
    LengthTooLong { addr: IpAddr, len: u8, max: u8 },
}

/// Maximum prefix length for the family of `addr`.
fn max_length(addr: &IpAddr) -> u8 {
    match addr {
        IpAddr::V4(_) => MAX_LENGTH_V4,
        IpAddr::V6(_) => MAX_LENGTH_V6,
    }
}

/// Numeric value of an address.
fn addr_bits(addr: IpAddr) -> u128 {
    match addr {
        IpAddr::V4(v4) => u32::from(v4) as u128,
        IpAddr::V6(v6) => u128::from(v6),
    }
}

/// Rebuild an address of the same family as `like` from its numeric value.
fn addr_from_bits(bits: u128, like: &IpAddr) -> IpAddr {
    match like {
        IpAddr::V4(_) => IpAddr::V4(Ipv4Addr::from(bits as u32)),
        IpAddr::V6(_) => IpAddr::V6(Ipv6Addr::from(bits)),
    }
}

/// Mask covering the lowest `host_bits` bits.
fn host_mask(host_bits: u8) -> u128 {
    if host_bits >= MAX_LENGTH_V6 {
        u128::MAX
    } else {
        (1u128 << host_bits) - 1
    }
}

/// Get the network address for a given IP and prefix length.
fn cut_addr(addr: IpAddr, len: u8) -> Result<IpAddr, CidrError> {
    let max = max_length(&addr);
    if len > max {
        return Err(CidrError::LengthTooLong { addr, len, max });
    }
    let bits = addr_bits(addr) & !host_mask(max - len);
    Ok(addr_from_bits(bits, &addr))
}

/// A network address with a prefix length.
///
/// The address is always the network address: host bits are cleared on
/// construction. Ordering is numeric by address (all IPv4 before IPv6), then
/// by prefix length so that a covering block sorts before the blocks it
/// contains.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct CidrBlock {
    /// The network address.
    pub addr: IpAddr,
    /// The prefix length (0-32 for IPv4, 0-128 for IPv6).
    pub len: u8,
}

impl CidrBlock {
    /// Create a new [`CidrBlock`] from an address or CIDR string
    /// (e.g. "10.0.0.1", "10.0.0.0/24", "2400:7aa0::/32").
    ///
    /// Host bits are masked off, so "10.0.0.1/24" becomes "10.0.0.0/24".
    ///
    /// # Examples
    /// ```
    /// use zscaler_egress_ips::models::CidrBlock;
    /// assert_eq!(CidrBlock::new("10.0.0.1/24").unwrap().to_string(), "10.0.0.0/24");
    /// assert_eq!(CidrBlock::new("2400:7aa0::1").unwrap().len, 128);
    /// ```
    pub fn new(addr_cidr: &str) -> Result<CidrBlock, CidrError> {
        let addr_cidr = addr_cidr.trim();
        let (addr, len) = match addr_cidr.split_once('/') {
            Some((addr, len)) => (addr, Some(len)),
            None => (addr_cidr, None),
        };
        let addr: IpAddr = addr
            .parse()
            .map_err(|_| CidrError::InvalidAddress(addr.to_string()))?;
        let len = match len {
            // u8::from_str takes a leading '+', ip_network style prefixes do not
            Some(len) if len.is_empty() || !len.bytes().all(|b| b.is_ascii_digit()) => {
                return Err(CidrError::InvalidLength(len.to_string()))
            }
            Some(len) => len
                .parse::<u8>()
                .map_err(|_| CidrError::InvalidLength(len.to_string()))?,
            None => max_length(&addr),
        };
        CidrBlock::from_parts(addr, len)
    }

    /// Build a block from an address and prefix length, clearing host bits.
    pub fn from_parts(addr: IpAddr, len: u8) -> Result<CidrBlock, CidrError> {
        let addr = cut_addr(addr, len)?;
        Ok(CidrBlock { addr, len })
    }

    /// A single-address block (/32 or /128).
    pub fn host(addr: IpAddr) -> CidrBlock {
        CidrBlock {
            addr,
            len: max_length(&addr),
        }
    }

    pub fn is_ipv4(&self) -> bool {
        self.addr.is_ipv4()
    }

    pub fn max_length(&self) -> u8 {
        max_length(&self.addr)
    }

    /// Number of host bits below the prefix.
    fn host_bits(&self) -> u8 {
        self.max_length() - self.len
    }

    /// Numeric value of the lowest (network) address.
    pub fn lo_bits(&self) -> u128 {
        addr_bits(self.addr)
    }

    /// Numeric value of the highest address.
    pub fn hi_bits(&self) -> u128 {
        self.lo_bits() | host_mask(self.host_bits())
    }

    /// True if `other` lies entirely inside this block.
    pub fn contains(&self, other: &CidrBlock) -> bool {
        self.is_ipv4() == other.is_ipv4()
            && self.len <= other.len
            && self.lo_bits() <= other.lo_bits()
            && other.hi_bits() <= self.hi_bits()
    }

    /// The enclosing block one bit shorter, or `None` for /0.
    pub fn parent(&self) -> Option<CidrBlock> {
        let len = self.len.checked_sub(1)?;
        let addr = addr_from_bits(self.lo_bits() & !host_mask(self.host_bits() + 1), &self.addr);
        Some(CidrBlock { addr, len })
    }

    /// Merge two sibling blocks into their parent.
    ///
    /// Succeeds only when `self` is the aligned lower half and `upper` the
    /// directly following upper half of the same parent block, so the union
    /// never covers an address outside the two inputs.
    pub fn merge(&self, upper: &CidrBlock) -> Option<CidrBlock> {
        if self.is_ipv4() != upper.is_ipv4() || self.len != upper.len {
            return None;
        }
        let parent = self.parent()?;
        if parent.lo_bits() != self.lo_bits() {
            return None;
        }
        let next = self.hi_bits().checked_add(1)?;
        if upper.lo_bits() != next {
            return None;
        }
        Some(parent)
    }
}

impl FromStr for CidrBlock {
    type Err = CidrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CidrBlock::new(s)
    }
}

impl Serialize for CidrBlock {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for CidrBlock {
    fn deserialize<D>(deserializer: D) -> Result<CidrBlock, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        CidrBlock::new(&s).map_err(|e| de::Error::custom(format!("invalid CIDR {s}: {e}")))
    }
}

impl std::fmt::Display for CidrBlock {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_mask() {
        assert_eq!(host_mask(0), 0);
        assert_eq!(host_mask(1), 1);
        assert_eq!(host_mask(32), 0xFFFF_FFFF);
        assert_eq!(host_mask(127), u128::MAX >> 1);
        assert_eq!(host_mask(128), u128::MAX);
    }

    #[test]
    fn test_cut_addr() {
        let ip: IpAddr = "192.168.1.42".parse().unwrap();
        assert_eq!(cut_addr(ip, 24).unwrap().to_string(), "192.168.1.0");
        assert_eq!(cut_addr(ip, 16).unwrap().to_string(), "192.168.0.0");
        assert_eq!(cut_addr(ip, 0).unwrap().to_string(), "0.0.0.0");
        assert_eq!(cut_addr(ip, 32).unwrap(), ip);
        assert!(cut_addr(ip, 33).is_err());

        let ip6: IpAddr = "2400:7aa0:1:2::9".parse().unwrap();
        assert_eq!(cut_addr(ip6, 32).unwrap().to_string(), "2400:7aa0::");
        assert_eq!(cut_addr(ip6, 128).unwrap(), ip6);
        assert!(cut_addr(ip6, 129).is_err());
    }

    #[test]
    fn test_new_bare_and_cidr() {
        let host = CidrBlock::new("185.46.212.88").unwrap();
        assert_eq!(host.len, 32);
        assert_eq!(host.to_string(), "185.46.212.88/32");

        let net = CidrBlock::new(" 147.161.174.0/23 ").unwrap();
        assert_eq!(net.to_string(), "147.161.174.0/23");

        let v6 = CidrBlock::new("2400:7aa0::1").unwrap();
        assert_eq!(v6.len, 128);
        assert!(!v6.is_ipv4());
    }

    #[test]
    fn test_new_masks_host_bits() {
        let net = CidrBlock::new("10.0.0.77/24").unwrap();
        assert_eq!(net.to_string(), "10.0.0.0/24");
    }

    #[test]
    fn test_new_errors() {
        assert_eq!(
            CidrBlock::new("not-an-ip").unwrap_err(),
            CidrError::InvalidAddress("not-an-ip".to_string())
        );
        assert_eq!(
            CidrBlock::new("10.0.0.0/abc").unwrap_err(),
            CidrError::InvalidLength("abc".to_string())
        );
        assert!(matches!(
            CidrBlock::new("10.0.0.0/33").unwrap_err(),
            CidrError::LengthTooLong { len: 33, max: 32, .. }
        ));
    }

    #[test]
    fn test_signed_or_empty_length_rejected() {
        for input in ["10.0.0.0/+8", "10.0.0.0/-8", "10.0.0.0/", "2400:7aa0::/+32", "10.0.0.0/ 8"] {
            assert!(
                matches!(CidrBlock::new(input), Err(CidrError::InvalidLength(_))),
                "{input} should be rejected"
            );
        }
    }

    #[test]
    fn test_lo_hi() {
        let net = CidrBlock::new("10.0.10.0/24").unwrap();
        assert_eq!(net.lo_bits(), u32::from(Ipv4Addr::new(10, 0, 10, 0)) as u128);
        assert_eq!(net.hi_bits(), u32::from(Ipv4Addr::new(10, 0, 10, 255)) as u128);

        let all = CidrBlock::new("::/0").unwrap();
        assert_eq!(all.hi_bits(), u128::MAX);
    }

    #[test]
    fn test_contains() {
        let big = CidrBlock::new("10.0.0.0/8").unwrap();
        let small = CidrBlock::new("10.0.10.64/26").unwrap();
        let other = CidrBlock::new("11.0.0.0/26").unwrap();
        let v6 = CidrBlock::new("::a00:0/104").unwrap();
        assert!(big.contains(&small));
        assert!(big.contains(&big));
        assert!(!small.contains(&big));
        assert!(!big.contains(&other));
        assert!(!big.contains(&v6));
    }

    #[test]
    fn test_parent() {
        let net = CidrBlock::new("203.0.113.3/32").unwrap();
        assert_eq!(net.parent().unwrap().to_string(), "203.0.113.2/31");
        assert!(CidrBlock::new("0.0.0.0/0").unwrap().parent().is_none());
    }

    #[test]
    fn test_merge_siblings() {
        let lo = CidrBlock::new("192.168.0.0/25").unwrap();
        let hi = CidrBlock::new("192.168.0.128/25").unwrap();
        assert_eq!(lo.merge(&hi).unwrap().to_string(), "192.168.0.0/24");
        // order matters: the lower half must come first
        assert!(hi.merge(&lo).is_none());
    }

    #[test]
    fn test_merge_rejects_unaligned() {
        // .1 and .2 are adjacent but .1/32 is not the lower half of a /31
        let a = CidrBlock::new("203.0.113.1").unwrap();
        let b = CidrBlock::new("203.0.113.2").unwrap();
        assert!(a.merge(&b).is_none());
    }

    #[test]
    fn test_merge_rejects_mixed() {
        let a = CidrBlock::new("10.0.0.0/24").unwrap();
        let b = CidrBlock::new("10.0.1.0/25").unwrap();
        assert!(a.merge(&b).is_none());

        let v6 = CidrBlock::new("::a00:100/120").unwrap();
        assert!(a.merge(&v6).is_none());
    }

    #[test]
    fn test_ordering() {
        let mut blocks: Vec<CidrBlock> = ["2400:7aa0::/32", "10.0.1.0/24", "10.0.0.0/25", "10.0.0.0/24"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        blocks.sort();
        let sorted: Vec<String> = blocks.iter().map(|b| b.to_string()).collect();
        assert_eq!(
            sorted,
            vec!["10.0.0.0/24", "10.0.0.0/25", "10.0.1.0/24", "2400:7aa0::/32"]
        );
    }

    #[test]
    fn test_serde_string() {
        let net = CidrBlock::new("147.161.174.0/23").unwrap();
        let json = serde_json::to_string(&net).unwrap();
        assert_eq!(json, "\"147.161.174.0/23\"");
        let back: CidrBlock = serde_json::from_str(&json).unwrap();
        assert_eq!(back, net);
        assert!(serde_json::from_str::<CidrBlock>("\"bogus/8\"").is_err());
    }
}
