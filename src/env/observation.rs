use serde::{Deserialize, Serialize};

use crate::game::{Board, Cell, Player};

/// How the board is exported to agents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObservationEncoding {
    /// `[height, width, 2]` booleans, channel 0 = player 1, channel 1 = player 2.
    #[default]
    BoolPlanes,
    /// `[height, width, 1]` signed bytes: +1 player 1, -1 player 2, 0 empty.
    SignedPlane,
    /// `[height, width, 3]` RGB image: yellow player 1, red player 2, blue empty.
    Rgb,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ObservationData {
    Bool(Vec<bool>),
    I8(Vec<i8>),
    U8(Vec<u8>),
}

/// Encoded board, stored row-major as `[row][col][channel]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Observation {
    pub shape: [usize; 3],
    pub data: ObservationData,
}

impl Observation {
    /// Flat index of (row, col, channel)
    pub fn index(&self, row: usize, col: usize, channel: usize) -> usize {
        (row * self.shape[1] + col) * self.shape[2] + channel
    }
}

pub const YELLOW: [u8; 3] = [255, 255, 0];
pub const RED: [u8; 3] = [255, 0, 0];
pub const BLUE: [u8; 3] = [0, 0, 255];

/// Encode the board with the chosen encoding.
pub fn encode(board: &Board, encoding: ObservationEncoding) -> Observation {
    match encoding {
        ObservationEncoding::BoolPlanes => encode_bool_planes(board),
        ObservationEncoding::SignedPlane => encode_signed_plane(board),
        ObservationEncoding::Rgb => encode_rgb(board),
    }
}

fn cells(board: &Board) -> impl Iterator<Item = Option<Player>> + '_ {
    (0..board.height())
        .flat_map(move |row| (0..board.width()).map(move |col| board.occupant(Cell::new(row, col))))
}

fn encode_bool_planes(board: &Board) -> Observation {
    let data = cells(board)
        .flat_map(|owner| [owner == Some(Player::One), owner == Some(Player::Two)])
        .collect();
    Observation {
        shape: [board.height(), board.width(), 2],
        data: ObservationData::Bool(data),
    }
}

fn encode_signed_plane(board: &Board) -> Observation {
    let data = cells(board)
        .map(|owner| match owner {
            Some(Player::One) => 1,
            Some(Player::Two) => -1,
            None => 0,
        })
        .collect();
    Observation {
        shape: [board.height(), board.width(), 1],
        data: ObservationData::I8(data),
    }
}

fn encode_rgb(board: &Board) -> Observation {
    let data = cells(board)
        .flat_map(|owner| match owner {
            Some(Player::One) => YELLOW,
            Some(Player::Two) => RED,
            None => BLUE,
        })
        .collect();
    Observation {
        shape: [board.height(), board.width(), 3],
        data: ObservationData::U8(data),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with_two_moves() -> Board {
        let mut board = Board::new(6, 7);
        board.apply_move(Player::One, 3).unwrap();
        board.apply_move(Player::Two, 3).unwrap();
        board
    }

    #[test]
    fn test_bool_planes() {
        let obs = encode(&board_with_two_moves(), ObservationEncoding::BoolPlanes);
        assert_eq!(obs.shape, [6, 7, 2]);
        let ObservationData::Bool(data) = &obs.data else {
            panic!("expected boolean data");
        };
        assert_eq!(data.len(), 84);
        assert!(data[obs.index(5, 3, 0)]);
        assert!(!data[obs.index(5, 3, 1)]);
        assert!(data[obs.index(4, 3, 1)]);
        assert_eq!(data.iter().filter(|&&b| b).count(), 2);
    }

    #[test]
    fn test_signed_plane() {
        let obs = encode(&board_with_two_moves(), ObservationEncoding::SignedPlane);
        assert_eq!(obs.shape, [6, 7, 1]);
        let ObservationData::I8(data) = &obs.data else {
            panic!("expected signed data");
        };
        assert_eq!(data[obs.index(5, 3, 0)], 1);
        assert_eq!(data[obs.index(4, 3, 0)], -1);
        assert_eq!(data[obs.index(0, 0, 0)], 0);
    }

    #[test]
    fn test_rgb() {
        let obs = encode(&board_with_two_moves(), ObservationEncoding::Rgb);
        assert_eq!(obs.shape, [6, 7, 3]);
        let ObservationData::U8(data) = &obs.data else {
            panic!("expected byte data");
        };
        let pixel = |row, col| {
            let i = obs.index(row, col, 0);
            [data[i], data[i + 1], data[i + 2]]
        };
        assert_eq!(pixel(5, 3), YELLOW);
        assert_eq!(pixel(4, 3), RED);
        assert_eq!(pixel(0, 0), BLUE);
    }

    #[test]
    fn test_empty_board_encodes_empty() {
        let obs = encode(&Board::new(2, 3), ObservationEncoding::BoolPlanes);
        assert_eq!(obs.data, ObservationData::Bool(vec![false; 12]));
    }
}
