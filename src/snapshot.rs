//! Versioned byte encoding of a game session.
//!
//! The host shell persists per-widget snapshots into flat key-value
//! browser storage; it treats these bytes as opaque. Only the durable
//! parts of a session are encoded — board masks, turn, move counter.
//! Selection is interaction state and always restores to `Idle`.

use crate::board::{Board, Color};
use crate::game::{Game, PLAYER_BLACK, PLAYER_RED};

const MAGIC: &[u8; 4] = b"CKRS";
const VERSION: u32 = 1;
const HEADER_SIZE: usize = 12;
// Three masks, one turn byte, one u32 move counter.
const PAYLOAD_SIZE: usize = 29;

// Squares with `(row + col)` odd, the only ones pieces may occupy.
const DARK_SQUARES: u64 = 0x55AA_55AA_55AA_55AA;

/// Serializes a game into the `CKRS` snapshot format:
/// magic, version, CRC32 of the payload, then the payload.
pub fn encode(game: &Game) -> Vec<u8> {
    let (red, black, kings) = game.board().masks();

    let mut payload = Vec::with_capacity(PAYLOAD_SIZE);
    payload.extend_from_slice(&red.to_le_bytes());
    payload.extend_from_slice(&black.to_le_bytes());
    payload.extend_from_slice(&kings.to_le_bytes());
    payload.push(game.current_player());
    payload.extend_from_slice(&game.moves_played().to_le_bytes());

    let crc = crc32fast::hash(&payload);
    let mut out = Vec::with_capacity(HEADER_SIZE + PAYLOAD_SIZE);
    out.extend_from_slice(MAGIC);
    out.extend_from_slice(&VERSION.to_le_bytes());
    out.extend_from_slice(&crc.to_le_bytes());
    out.extend_from_slice(&payload);
    out
}

/// Deserializes a snapshot produced by [`encode`].
///
/// Rejects malformed framing and any payload that violates the board
/// invariants: overlapping color masks, kings outside the occupancy,
/// pieces on non-playable squares, or an unknown turn byte.
pub fn decode(data: &[u8]) -> Result<Game, String> {
    if data.len() < HEADER_SIZE {
        return Err(format!(
            "snapshot too short: expected at least {HEADER_SIZE} bytes, got {}",
            data.len()
        ));
    }

    if &data[0..4] != MAGIC {
        return Err("invalid snapshot magic (expected CKRS)".to_string());
    }

    let version = read_u32_le(data, 4)?;
    if version != VERSION {
        return Err(format!(
            "unsupported snapshot version: expected {VERSION}, got {version}"
        ));
    }

    let expected_crc = read_u32_le(data, 8)?;
    let payload = &data[HEADER_SIZE..];

    let actual_crc = crc32fast::hash(payload);
    if actual_crc != expected_crc {
        return Err(format!(
            "CRC32 mismatch: expected {expected_crc:#010x}, got {actual_crc:#010x}"
        ));
    }

    if payload.len() != PAYLOAD_SIZE {
        return Err(format!(
            "snapshot payload must be {PAYLOAD_SIZE} bytes, got {}",
            payload.len()
        ));
    }

    let red = read_u64_le(payload, 0)?;
    let black = read_u64_le(payload, 8)?;
    let kings = read_u64_le(payload, 16)?;
    let turn = match payload[24] {
        PLAYER_RED => Color::Red,
        PLAYER_BLACK => Color::Black,
        other => return Err(format!("invalid turn byte: {other}")),
    };
    let moves_played = read_u32_le(payload, 25)?;

    if red & black != 0 {
        return Err("red and black masks overlap".to_string());
    }
    if kings & !(red | black) != 0 {
        return Err("kings mask marks empty squares".to_string());
    }
    if (red | black) & !DARK_SQUARES != 0 {
        return Err("pieces found on non-playable squares".to_string());
    }

    Ok(Game::from_parts(
        Board::from_masks(red, black, kings),
        turn,
        moves_played,
    ))
}

fn read_u32_le(data: &[u8], offset: usize) -> Result<u32, String> {
    let bytes: [u8; 4] = data
        .get(offset..offset + 4)
        .and_then(|slice| slice.try_into().ok())
        .ok_or_else(|| format!("unexpected EOF reading u32 at offset {offset}"))?;
    Ok(u32::from_le_bytes(bytes))
}

fn read_u64_le(data: &[u8], offset: usize) -> Result<u64, String> {
    let bytes: [u8; 8] = data
        .get(offset..offset + 8)
        .and_then(|slice| slice.try_into().ok())
        .ok_or_else(|| format!("unexpected EOF reading u64 at offset {offset}"))?;
    Ok(u64::from_le_bytes(bytes))
}
