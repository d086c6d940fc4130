//! Bit-packing and XOR folding of escape flags.

/// Packs single-bit flags MSB-first into a byte accumulator and XOR-folds
/// every completed byte into a running checksum.
///
/// The accumulator is only ever cleared by a flush: automatically once eight
/// bits have been collected, or explicitly via [`BitPacker::flush_padded`]
/// at the end of a row. It is never reset between rows by any other path.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BitPacker {
    sum: u32,
    byte_acc: u32,
    bit_num: u32,
}

impl BitPacker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shift one flag into the accumulator, folding a full byte into the
    /// checksum on the eighth bit.
    pub fn push(&mut self, escaped: bool) {
        debug_assert!(self.bit_num < 8);
        debug_assert!(self.byte_acc < 1 << self.bit_num);

        self.byte_acc = (self.byte_acc << 1) | escaped as u32;
        self.bit_num += 1;

        if self.bit_num == 8 {
            self.sum ^= self.byte_acc;
            self.byte_acc = 0;
            self.bit_num = 0;
        }
    }

    /// Pad a partial byte with trailing zero bits and fold it. A no-op when
    /// the accumulator is empty, which is exactly the case where the eighth
    /// bit of a row's final byte already forced a flush.
    pub fn flush_padded(&mut self) {
        if self.bit_num != 0 {
            self.byte_acc <<= 8 - self.bit_num;
            self.sum ^= self.byte_acc;
            self.byte_acc = 0;
            self.bit_num = 0;
        }
    }

    pub fn sum(self) -> u32 {
        self.sum
    }

    #[cfg(test)]
    fn pending_bits(self) -> u32 {
        self.bit_num
    }
}
