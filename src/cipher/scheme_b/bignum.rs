//! Minimal unsigned big-integer support for Scheme B's seed fold (§4.3
//! step 3): the spec calls for bitwise XOR and unbounded-precision sum
//! across 256-bit SHA-256 digests, neither of which fits a machine
//! integer. This is a small purpose-built widening integer rather than a
//! general bignum library, since the only operations needed are
//! "XOR these", "sum these", and "convert the result to `f64`".

/// Little-endian 64-bit limbs, growing as needed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BigUint(Vec<u64>);

impl BigUint {
    pub fn zero() -> Self {
        Self(vec![0])
    }

    /// Parse a big-endian byte slice (e.g. a SHA-256 digest) as an
    /// unsigned integer.
    pub fn from_be_bytes(bytes: &[u8]) -> Self {
        let pad = (8 - bytes.len() % 8) % 8;
        let mut padded = vec![0u8; pad];
        padded.extend_from_slice(bytes);

        let mut limbs: Vec<u64> = padded
            .chunks(8)
            .map(|chunk| {
                let mut arr = [0u8; 8];
                arr.copy_from_slice(chunk);
                u64::from_be_bytes(arr)
            })
            .collect();
        limbs.reverse();
        Self(limbs).trimmed()
    }

    fn trimmed(mut self) -> Self {
        while self.0.len() > 1 && *self.0.last().unwrap() == 0 {
            self.0.pop();
        }
        self
    }

    pub fn xor(&self, other: &Self) -> Self {
        let n = self.0.len().max(other.0.len());
        let out: Vec<u64> = (0..n)
            .map(|i| self.0.get(i).copied().unwrap_or(0) ^ other.0.get(i).copied().unwrap_or(0))
            .collect();
        Self(out).trimmed()
    }

    pub fn add(&self, other: &Self) -> Self {
        let n = self.0.len().max(other.0.len()) + 1;
        let mut out = vec![0u64; n];
        let mut carry: u128 = 0;
        for (i, slot) in out.iter_mut().enumerate() {
            let a = self.0.get(i).copied().unwrap_or(0) as u128;
            let b = other.0.get(i).copied().unwrap_or(0) as u128;
            let sum = a + b + carry;
            *slot = sum as u64;
            carry = sum >> 64;
        }
        Self(out).trimmed()
    }

    /// Convert to the nearest `f64`. For values wider than 53 bits this
    /// is necessarily lossy; the spec expects exactly this — the folded
    /// seed is "a very large floating-point value by design" (§4.3 step 4).
    pub fn to_f64(&self) -> f64 {
        let mut value = 0.0f64;
        for &limb in self.0.iter().rev() {
            value = value * 18_446_744_073_709_551_616.0 /* 2^64 */ + limb as f64;
        }
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_be_bytes_reads_big_endian_value() {
        let v = BigUint::from_be_bytes(&[0x00, 0x00, 0x01]);
        assert_eq!(v.to_f64(), 1.0);
    }

    #[test]
    fn xor_matches_elementwise_xor() {
        let a = BigUint::from_be_bytes(&[0xFF, 0x00]);
        let b = BigUint::from_be_bytes(&[0x0F, 0xFF]);
        let x = a.xor(&b);
        assert_eq!(x.to_f64(), 0xF0FFu32 as f64);
    }

    #[test]
    fn add_carries_across_limb_boundary() {
        let max_limb = BigUint(vec![u64::MAX]);
        let one = BigUint(vec![1]);
        let sum = max_limb.add(&one);
        assert_eq!(sum.to_f64(), 18_446_744_073_709_551_616.0);
    }
}
