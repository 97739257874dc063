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

use crate::{opcodes::all::*, *};
use hex_literal::hex;
use rstest::rstest;
use test_utils::random::{make_seedable_rng, Seed};

// Pay to public key hash output script.
const P2PKH: [u8; 25] = hex!("76a91489abcdefabbaabbaabbaabbaabbaabbaabbaabba88ac");

#[test]
fn p2pkh_chunks() {
    let script = Script::from(P2PKH.to_vec());
    let chunks: Vec<ScriptChunk> = script.chunks().collect::<Result<_>>().unwrap();

    let codes: Vec<u8> = chunks.iter().map(ScriptChunk::code).collect();
    assert_eq!(codes, [OP_DUP, OP_HASH160, 20, OP_EQUALVERIFY, OP_CHECKSIG]);
    assert_eq!(chunks[2].payload(), Some(&P2PKH[3..23]));
    assert_eq!(chunks[2].source_offset(), Ok(2));
    assert_eq!(chunks[3].source_offset(), Ok(23));
    assert!(chunks.iter().filter(|c| c.is_push_data()).all(|c| c.is_minimal() == Ok(true)));

    assert_eq!(Script::from_chunks(&chunks).unwrap().as_bytes(), &P2PKH[..]);
    assert_eq!(
        script.to_string(),
        "DUP HASH160 PUSHDATA(20)[89abcdefabbaabbaabbaabbaabbaabbaabbaabba] EQUALVERIFY CHECKSIG"
    );
}

#[test]
fn multisig_chunks() {
    let key = [0x02; 33];
    let script = Builder::new()
        .push_int(1)
        .push_slice(&key)
        .push_slice(&key)
        .push_int(2)
        .push_opcode(OP_CHECKMULTISIG)
        .into_script()
        .unwrap();

    assert_eq!(script.len(), 1 + 2 * 34 + 1 + 1);
    let chunks: Vec<_> = script.chunks_with(&StandardContext).collect::<Result<_>>().unwrap();
    assert_eq!(chunks.len(), 5);
    assert_eq!(chunks[0].element(), Ok(Element::SmallNumber(1)));
    assert_eq!(chunks[1].element(), Ok(Element::DirectPush(&key)));
    assert_eq!(chunks[3].element(), Ok(Element::SmallNumber(2)));
    assert_eq!(chunks[4].element(), Ok(Element::Operation(OP_CHECKMULTISIG)));
}

#[test]
fn zero_reparses_as_empty_push() {
    // Both representations of zero share one encoding, the parser produces the empty push.
    let synthetic = ScriptChunk::new(OP_0, None);
    let script = Script::from_chunks([&synthetic]).unwrap();
    let parsed = script.chunks().next().unwrap().unwrap();
    assert_eq!(parsed.payload(), Some(&[][..]));
    assert!(!parsed.eq_ignoring_offset(&synthetic));
    assert!(parsed.eq_ignoring_offset(&ScriptChunk::small_num(0).unwrap()));
}

#[rstest]
#[trace]
#[case(Seed::from_entropy())]
fn random_payload_roundtrip(#[case] seed: Seed) {
    let mut rng = make_seedable_rng(seed);

    for _ in 0..100 {
        let data = test_utils::random_bytes(&mut rng, 0..=StandardContext::MAX_SCRIPT_ELEMENT_SIZE);
        let chunk = ScriptChunk::push_slice(&data);
        assert_eq!(chunk.is_minimal(), Ok(true));

        let script = Script::from_chunks([&chunk]).unwrap();
        let parsed = script.chunks_with(&StandardContext).next().unwrap().unwrap();
        assert!(parsed.eq_ignoring_offset(&chunk));
        assert_eq!(parsed.source_offset(), Ok(0));
    }
}

#[rstest]
#[trace]
#[case(Seed::from_entropy())]
fn random_non_minimal_pushes_detected(#[case] seed: Seed) {
    let mut rng = make_seedable_rng(seed);

    for _ in 0..100 {
        // Longer than a direct push allows, yet short enough for one length byte.
        let data = test_utils::random_bytes(&mut rng, 76..=255);
        let wide = ScriptChunk::new(OP_PUSHDATA2, Some(data.clone()));
        assert_eq!(wide.is_minimal(), Ok(false));

        let script = Script::from_chunks([&wide]).unwrap();
        assert_eq!(script.len(), 3 + data.len());
        assert_eq!(
            script.check_minimal_pushes(&StandardContext),
            Err(Error::NonMinimalPush { offset: 0 })
        );
        assert!(script.check_minimal_pushes(&RelaxedContext).is_ok());
    }
}

#[rstest]
#[trace]
#[case(Seed::from_entropy())]
fn random_opcode_chunks(#[case] seed: Seed) {
    let mut rng = make_seedable_rng(seed);

    for _ in 0..100 {
        let code = test_utils::random_opcode(&mut rng);
        let chunk = ScriptChunk::new(code, None);
        match chunk.element() {
            Ok(_) => assert_eq!(chunk.encode(), Ok(vec![code])),
            Err(err) => {
                assert!((0x01..=OP_PUSHDATA4).contains(&code));
                assert_eq!(
                    err,
                    Error::InvalidState(ChunkStateError::MissingPayload { code })
                );
            }
        }
    }
}
