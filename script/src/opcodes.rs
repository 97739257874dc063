// Copyright (c) 2021-2025 RBB S.r.l
// opensource@mintlayer.org
// SPDX-License-Identifier: MIT
// Licensed under the MIT License;
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// https://github.com/mintlayer/mintlayer-core/blob/master/LICENSE
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Script opcodes.
//!
//! Each opcode is a single byte. The byte either names an operation or describes how the data
//! that follows it is pushed onto the stack:
//!
//! * `0x01..=0x4b` push that many bytes,
//! * [all::OP_PUSHDATA1], [all::OP_PUSHDATA2] and [all::OP_PUSHDATA4] push data whose length
//!   is given by the following 1, 2 or 4 little-endian bytes,
//! * everything above [all::OP_PUSHDATA4] is an operation without payload.
//!
//! Some operations push small numbers without any payload: [all::OP_1NEGATE] and
//! [all::OP_1] through [all::OP_16]. [all::OP_0] pushes an empty array.

macro_rules! define_opcodes {
    ($($(#[$meta:meta])* $name:ident = $code:literal => $text:literal,)*) => {
        /// Named opcode values.
        pub mod all {
            $(
                $(#[$meta])*
                pub const $name: u8 = $code;
            )*
        }

        /// Opcodes with a display name, in ascending order.
        pub(crate) const NAMED: &[(u8, &str)] = &[$(($code, $text),)*];
    };
}

define_opcodes! {
    /// Push an empty array.
    OP_0 = 0x00 => "0",
    /// Push the next byte as the number of bytes to push.
    OP_PUSHDATA1 = 0x4c => "PUSHDATA1",
    /// Push the next two bytes (little endian) as the number of bytes to push.
    OP_PUSHDATA2 = 0x4d => "PUSHDATA2",
    /// Push the next four bytes (little endian) as the number of bytes to push.
    OP_PUSHDATA4 = 0x4e => "PUSHDATA4",
    /// Push -1.
    OP_1NEGATE = 0x4f => "-1",
    OP_RESERVED = 0x50 => "RESERVED",
    /// Push 1. The following opcodes up to [OP_16] push 2 to 16.
    OP_1 = 0x51 => "1",
    OP_2 = 0x52 => "2",
    OP_3 = 0x53 => "3",
    OP_4 = 0x54 => "4",
    OP_5 = 0x55 => "5",
    OP_6 = 0x56 => "6",
    OP_7 = 0x57 => "7",
    OP_8 = 0x58 => "8",
    OP_9 = 0x59 => "9",
    OP_10 = 0x5a => "10",
    OP_11 = 0x5b => "11",
    OP_12 = 0x5c => "12",
    OP_13 = 0x5d => "13",
    OP_14 = 0x5e => "14",
    OP_15 = 0x5f => "15",
    OP_16 = 0x60 => "16",

    // Control flow
    OP_NOP = 0x61 => "NOP",
    OP_VER = 0x62 => "VER",
    OP_IF = 0x63 => "IF",
    OP_NOTIF = 0x64 => "NOTIF",
    OP_VERIF = 0x65 => "VERIF",
    OP_VERNOTIF = 0x66 => "VERNOTIF",
    OP_ELSE = 0x67 => "ELSE",
    OP_ENDIF = 0x68 => "ENDIF",
    OP_VERIFY = 0x69 => "VERIFY",
    OP_RETURN = 0x6a => "RETURN",

    // Stack
    OP_TOALTSTACK = 0x6b => "TOALTSTACK",
    OP_FROMALTSTACK = 0x6c => "FROMALTSTACK",
    OP_2DROP = 0x6d => "2DROP",
    OP_2DUP = 0x6e => "2DUP",
    OP_3DUP = 0x6f => "3DUP",
    OP_2OVER = 0x70 => "2OVER",
    OP_2ROT = 0x71 => "2ROT",
    OP_2SWAP = 0x72 => "2SWAP",
    OP_IFDUP = 0x73 => "IFDUP",
    OP_DEPTH = 0x74 => "DEPTH",
    OP_DROP = 0x75 => "DROP",
    OP_DUP = 0x76 => "DUP",
    OP_NIP = 0x77 => "NIP",
    OP_OVER = 0x78 => "OVER",
    OP_PICK = 0x79 => "PICK",
    OP_ROLL = 0x7a => "ROLL",
    OP_ROT = 0x7b => "ROT",
    OP_SWAP = 0x7c => "SWAP",
    OP_TUCK = 0x7d => "TUCK",

    // Splice
    OP_CAT = 0x7e => "CAT",
    OP_SUBSTR = 0x7f => "SUBSTR",
    OP_LEFT = 0x80 => "LEFT",
    OP_RIGHT = 0x81 => "RIGHT",
    OP_SIZE = 0x82 => "SIZE",

    // Bitwise logic
    OP_INVERT = 0x83 => "INVERT",
    OP_AND = 0x84 => "AND",
    OP_OR = 0x85 => "OR",
    OP_XOR = 0x86 => "XOR",
    OP_EQUAL = 0x87 => "EQUAL",
    OP_EQUALVERIFY = 0x88 => "EQUALVERIFY",
    OP_RESERVED1 = 0x89 => "RESERVED1",
    OP_RESERVED2 = 0x8a => "RESERVED2",

    // Arithmetic
    OP_1ADD = 0x8b => "1ADD",
    OP_1SUB = 0x8c => "1SUB",
    OP_2MUL = 0x8d => "2MUL",
    OP_2DIV = 0x8e => "2DIV",
    OP_NEGATE = 0x8f => "NEGATE",
    OP_ABS = 0x90 => "ABS",
    OP_NOT = 0x91 => "NOT",
    OP_0NOTEQUAL = 0x92 => "0NOTEQUAL",
    OP_ADD = 0x93 => "ADD",
    OP_SUB = 0x94 => "SUB",
    OP_MUL = 0x95 => "MUL",
    OP_DIV = 0x96 => "DIV",
    OP_MOD = 0x97 => "MOD",
    OP_LSHIFT = 0x98 => "LSHIFT",
    OP_RSHIFT = 0x99 => "RSHIFT",
    OP_BOOLAND = 0x9a => "BOOLAND",
    OP_BOOLOR = 0x9b => "BOOLOR",
    OP_NUMEQUAL = 0x9c => "NUMEQUAL",
    OP_NUMEQUALVERIFY = 0x9d => "NUMEQUALVERIFY",
    OP_NUMNOTEQUAL = 0x9e => "NUMNOTEQUAL",
    OP_LESSTHAN = 0x9f => "LESSTHAN",
    OP_GREATERTHAN = 0xa0 => "GREATERTHAN",
    OP_LESSTHANOREQUAL = 0xa1 => "LESSTHANOREQUAL",
    OP_GREATERTHANOREQUAL = 0xa2 => "GREATERTHANOREQUAL",
    OP_MIN = 0xa3 => "MIN",
    OP_MAX = 0xa4 => "MAX",
    OP_WITHIN = 0xa5 => "WITHIN",

    // Crypto
    OP_RIPEMD160 = 0xa6 => "RIPEMD160",
    OP_SHA1 = 0xa7 => "SHA1",
    OP_SHA256 = 0xa8 => "SHA256",
    OP_HASH160 = 0xa9 => "HASH160",
    OP_HASH256 = 0xaa => "HASH256",
    OP_CODESEPARATOR = 0xab => "CODESEPARATOR",
    OP_CHECKSIG = 0xac => "CHECKSIG",
    OP_CHECKSIGVERIFY = 0xad => "CHECKSIGVERIFY",
    OP_CHECKMULTISIG = 0xae => "CHECKMULTISIG",
    OP_CHECKMULTISIGVERIFY = 0xaf => "CHECKMULTISIGVERIFY",

    // Expansion
    OP_NOP1 = 0xb0 => "NOP1",
    OP_CLTV = 0xb1 => "CHECKLOCKTIMEVERIFY",
    OP_CSV = 0xb2 => "CHECKSEQUENCEVERIFY",
    OP_NOP4 = 0xb3 => "NOP4",
    OP_NOP5 = 0xb4 => "NOP5",
    OP_NOP6 = 0xb5 => "NOP6",
    OP_NOP7 = 0xb6 => "NOP7",
    OP_NOP8 = 0xb7 => "NOP8",
    OP_NOP9 = 0xb8 => "NOP9",
    OP_NOP10 = 0xb9 => "NOP10",

    OP_INVALIDOPCODE = 0xff => "INVALIDOPCODE",
}

use all::*;

/// Largest length that can be pushed by the opcode byte alone.
pub const MAX_DIRECT_PUSH_LEN: usize = OP_PUSHDATA1 as usize - 1;

/// Number pushed by a small number opcode, `None` for any other opcode.
pub fn decode_small_num(code: u8) -> Option<i8> {
    match code {
        OP_0 => Some(0),
        OP_1NEGATE => Some(-1),
        OP_1..=OP_16 => Some((code - OP_1 + 1) as i8),
        _ => None,
    }
}

/// Opcode pushing given small number without a payload.
pub fn encode_small_num(num: i8) -> Option<u8> {
    match num {
        0 => Some(OP_0),
        -1 => Some(OP_1NEGATE),
        1..=16 => Some(OP_1 + num as u8 - 1),
        _ => None,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn named_opcodes_sorted_and_unique() {
        assert!(NAMED.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn small_num_codec() {
        for code in 0..=u8::MAX {
            if let Some(num) = decode_small_num(code) {
                assert_eq!(encode_small_num(num), Some(code));
            }
        }
        assert_eq!(decode_small_num(OP_RESERVED), None);
        assert_eq!(decode_small_num(OP_PUSHDATA1), None);
        assert_eq!(decode_small_num(0x05), None);
        assert_eq!(encode_small_num(17), None);
        assert_eq!(encode_small_num(-2), None);
        assert_eq!(decode_small_num(OP_16), Some(16));
    }

    #[test]
    fn zone_boundaries() {
        assert_eq!(MAX_DIRECT_PUSH_LEN, 75);
        assert!(OP_PUSHDATA1 < OP_PUSHDATA2 && OP_PUSHDATA2 < OP_PUSHDATA4);
        assert!(OP_PUSHDATA4 < OP_16);
    }
}
