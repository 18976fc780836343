//! Room code generation

use std::collections::VecDeque;

use rand::Rng;

/// Length of a generated room code
pub const ROOM_CODE_LEN: usize = 6;

const ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Source of candidate room codes
pub trait RoomCodeSource: Send {
    fn next_code(&mut self) -> String;
}

/// Uniform random base-36 codes
#[derive(Debug, Default)]
pub struct RandomRoomCodes;

impl RoomCodeSource for RandomRoomCodes {
    fn next_code(&mut self) -> String {
        let mut rng = rand::rng();
        (0..ROOM_CODE_LEN)
            .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
            .collect()
    }
}

/// Replays a fixed list of codes, repeating the last one when exhausted
#[derive(Debug, Clone)]
pub struct FixedRoomCodes {
    codes: VecDeque<String>,
    last: String,
}

impl FixedRoomCodes {
    pub fn new<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            codes: codes.into_iter().map(Into::into).collect(),
            last: "AAAAAA".to_string(),
        }
    }
}

impl RoomCodeSource for FixedRoomCodes {
    fn next_code(&mut self) -> String {
        if let Some(code) = self.codes.pop_front() {
            self.last = code;
        }
        self.last.clone()
    }
}
