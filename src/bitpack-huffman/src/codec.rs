use std::mem;

use bitpack_buf::BitBuffer;

use crate::{node::HuffmanNode, tree::HuffmanTree, HuffmanError};

/// Compresses a buffer's contents in place against a Huffman tree.
///
/// Every byte of the backing storage is replaced by its prefix code,
/// in original order. A partially used trailing byte is encoded like
/// any other, so decompression restores it including its zero-filled
/// padding bits.
///
/// Afterwards, the buffer's bit count reflects the length of the
/// encoded stream and the cursor rests past its last bit.
pub fn compress(buf: &mut BitBuffer, tree: &HuffmanTree) {
    let snapshot = mem::take(buf).into_inner();

    for &byte in &snapshot {
        let code = tree.code(byte);
        buf.write_bits(code.mask, code.len);
    }

    log::debug!(
        "compressed {} bytes into {} bits",
        snapshot.len(),
        buf.bit_count()
    );
}

/// Decompresses a buffer's contents in place against a Huffman tree.
///
/// The encoded stream is scanned bit by bit from the start: a 0 bit
/// descends left, a 1 bit descends right, and reaching a leaf emits
/// its byte value before restarting at the root. When the stream does
/// not end exactly on a leaf, the trailing partial code is silently
/// discarded.
///
/// Afterwards, the buffer holds the decoded bytes with the cursor at
/// the start, ready for reading values back in write order.
pub fn decompress(buf: &mut BitBuffer, tree: &HuffmanTree) -> Result<(), HuffmanError> {
    let mut decoded = Vec::new();
    let mut node = tree.root();

    buf.seek_start();
    while buf.position() < buf.bit_count() {
        let bit = buf.read_bit()?;

        node = match node {
            HuffmanNode::Internal { left, right, .. } => {
                if bit {
                    right.as_ref()
                } else {
                    left.as_ref()
                }
            }
            // Descent starts over at every leaf and the root of a
            // 256-leaf tree is always internal.
            HuffmanNode::Leaf { .. } => unreachable!(),
        };

        if let HuffmanNode::Leaf { value, .. } = node {
            decoded.push(*value);
            node = tree.root();
        }
    }

    log::debug!(
        "decompressed {} bits into {} bytes",
        buf.bit_count(),
        decoded.len()
    );

    *buf = BitBuffer::from_bytes(decoded);
    Ok(())
}
