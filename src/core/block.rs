// src/core/block.rs

//! Block names, per-block mutual-information tables, and the pointer basis.

use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use super::constants::BLOCKS;
use super::error::QdarwinError;

/// One of the three 2-qubit environment slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BlockId {
    Block0,
    Block1,
    Block2,
}

impl BlockId {
    /// All blocks in slot order.
    pub const ALL: [BlockId; 3] = [BlockId::Block0, BlockId::Block1, BlockId::Block2];

    pub fn index(self) -> usize {
        match self {
            BlockId::Block0 => 0,
            BlockId::Block1 => 1,
            BlockId::Block2 => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            BlockId::Block0 => "block0",
            BlockId::Block1 => "block1",
            BlockId::Block2 => "block2",
        }
    }

    /// Qubits of this block in the geometric partition.
    pub fn qubits(self) -> [usize; 2] {
        BLOCKS[self.index()]
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Mapping block name -> mutual information (bits).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MiTable {
    values: [f64; 3],
}

impl MiTable {
    pub fn new(values: [f64; 3]) -> Self {
        Self { values }
    }

    pub fn get(&self, block: BlockId) -> f64 {
        self.values[block.index()]
    }

    /// Iterates `(block, value)` in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (BlockId, f64)> + '_ {
        BlockId::ALL.into_iter().map(move |b| (b, self.values[b.index()]))
    }

    pub fn values(&self) -> &[f64; 3] {
        &self.values
    }

    /// Largest value across the three blocks.
    pub fn max(&self) -> f64 {
        self.values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Block holding the largest value (first one on ties).
    pub fn argmax(&self) -> BlockId {
        let mut best = BlockId::Block0;
        for (block, value) in self.iter() {
            if value > self.get(best) {
                best = block;
            }
        }
        best
    }
}

impl Index<BlockId> for MiTable {
    type Output = f64;

    fn index(&self, block: BlockId) -> &f64 {
        &self.values[block.index()]
    }
}

impl IndexMut<BlockId> for MiTable {
    fn index_mut(&mut self, block: BlockId) -> &mut f64 {
        &mut self.values[block.index()]
    }
}

impl fmt::Display for MiTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (block, value)) in self.iter().enumerate() {
            write!(f, "{}{}: {:.4}", if i > 0 { ", " } else { "" }, block, value)?;
        }
        write!(f, "}}")
    }
}

/// Measurement basis whose redundancy is being probed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pointer {
    /// Computational basis; block0 carries the Z coupling.
    Z,
    /// Conjugate basis; block2 carries the X coupling.
    X,
}

impl FromStr for Pointer {
    type Err = QdarwinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Z" => Ok(Pointer::Z),
            "X" => Ok(Pointer::X),
            other => Err(QdarwinError::InvalidPointer { pointer: other.to_string() }),
        }
    }
}

impl fmt::Display for Pointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pointer::Z => f.write_str("Z"),
            Pointer::X => f.write_str("X"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_parsing() {
        assert_eq!("Z".parse::<Pointer>(), Ok(Pointer::Z));
        assert_eq!("X".parse::<Pointer>(), Ok(Pointer::X));
        assert_eq!(
            "z".parse::<Pointer>(),
            Err(QdarwinError::InvalidPointer { pointer: "z".to_string() })
        );
    }

    #[test]
    fn test_table_max_and_argmax() {
        let table = MiTable::new([0.1, 0.4, 0.2]);
        assert_eq!(table.max(), 0.4);
        assert_eq!(table.argmax(), BlockId::Block1);
        assert_eq!(table[BlockId::Block2], 0.2);
    }

    #[test]
    fn test_block_qubits_follow_geometry() {
        assert_eq!(BlockId::Block0.qubits(), [1, 2]);
        assert_eq!(BlockId::Block2.qubits(), [5, 6]);
        assert_eq!(BlockId::Block1.to_string(), "block1");
    }
}
