//! Board parsing functionality for converting raw text layouts into tiles.

use crate::constants::MapTile;
use crate::error::ParseError;

/// Represents the parsed data from a raw board layout.
#[derive(Debug, Clone)]
pub struct ParsedBoard {
    /// The board width, in cells.
    pub width: usize,
    /// The board height, in cells.
    pub height: usize,
    /// The parsed tile layout, indexed as `tiles[y][x]`.
    pub tiles: Vec<Vec<MapTile>>,
}

/// Parser for converting raw board layouts into structured tile data.
pub struct BoardParser;

impl BoardParser {
    /// Parses a single character into a map tile.
    ///
    /// # Errors
    ///
    /// Returns an error if the character is not part of the board alphabet.
    pub fn parse_character(c: char) -> Result<MapTile, ParseError> {
        match c {
            '#' => Ok(MapTile::Wall),
            '.' => Ok(MapTile::Pellet),
            'o' => Ok(MapTile::PowerPellet),
            ' ' => Ok(MapTile::Empty),
            _ => Err(ParseError::UnknownCharacter(c)),
        }
    }

    /// Parses a raw board layout into structured tile data.
    ///
    /// # Errors
    ///
    /// Returns an error if the layout is empty, any row differs in width
    /// from the first, or any character is outside the board alphabet.
    pub fn parse_rows(rows: &[&str]) -> Result<ParsedBoard, ParseError> {
        let Some(first) = rows.first() else {
            return Err(ParseError::EmptyBoard);
        };
        let width = first.chars().count();

        let mut tiles = Vec::with_capacity(rows.len());
        for (y, row) in rows.iter().enumerate() {
            let actual = row.chars().count();
            if actual != width {
                return Err(ParseError::RaggedRow {
                    row: y,
                    expected: width,
                    actual,
                });
            }

            let parsed_row = row.chars().map(Self::parse_character).collect::<Result<Vec<_>, _>>()?;
            tiles.push(parsed_row);
        }

        Ok(ParsedBoard {
            width,
            height: rows.len(),
            tiles,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::RAW_BOARD;

    #[test]
    fn test_parse_character() {
        assert!(matches!(BoardParser::parse_character('#').unwrap(), MapTile::Wall));
        assert!(matches!(BoardParser::parse_character('.').unwrap(), MapTile::Pellet));
        assert!(matches!(BoardParser::parse_character('o').unwrap(), MapTile::PowerPellet));
        assert!(matches!(BoardParser::parse_character(' ').unwrap(), MapTile::Empty));

        // Test invalid character
        assert!(BoardParser::parse_character('Z').is_err());
    }

    #[test]
    fn test_parse_rows() {
        let parsed = BoardParser::parse_rows(&RAW_BOARD).unwrap();

        assert_eq!(parsed.height, RAW_BOARD.len());
        assert_eq!(parsed.width, RAW_BOARD[0].chars().count());
        assert_eq!(parsed.tiles.len(), parsed.height);
        assert!(parsed.tiles.iter().all(|row| row.len() == parsed.width));
    }

    #[test]
    fn test_parse_rows_unknown_character() {
        let result = BoardParser::parse_rows(&["###", "#Z#", "###"]);
        assert_eq!(result.unwrap_err(), ParseError::UnknownCharacter('Z'));
    }

    #[test]
    fn test_parse_rows_ragged_row() {
        let result = BoardParser::parse_rows(&["####", "##", "####"]);
        assert_eq!(
            result.unwrap_err(),
            ParseError::RaggedRow {
                row: 1,
                expected: 4,
                actual: 2,
            }
        );
    }

    #[test]
    fn test_parse_rows_empty() {
        assert_eq!(BoardParser::parse_rows(&[]).unwrap_err(), ParseError::EmptyBoard);
    }
}
