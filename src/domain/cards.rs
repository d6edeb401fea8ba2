//! Card semantics: suits, ranks, the wrong-5 trump rule, trump ranking,
//! and per-card point value.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Color {
    Red,
    Black,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Colour helper: used only to compute the wrong-5.
    pub fn color(self) -> Color {
        match self {
            Suit::Hearts | Suit::Diamonds => Color::Red,
            Suit::Clubs | Suit::Spades => Color::Black,
        }
    }

    /// The other suit of the same colour: hearts<->diamonds, clubs<->spades.
    pub fn same_color_other(self) -> Suit {
        match self {
            Suit::Hearts => Suit::Diamonds,
            Suit::Diamonds => Suit::Hearts,
            Suit::Clubs => Suit::Spades,
            Suit::Spades => Suit::Clubs,
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", rank_char(self.rank), suit_char(self.suit))
    }
}

fn rank_char(rank: Rank) -> char {
    match rank {
        Rank::Two => '2',
        Rank::Three => '3',
        Rank::Four => '4',
        Rank::Five => '5',
        Rank::Six => '6',
        Rank::Seven => '7',
        Rank::Eight => '8',
        Rank::Nine => '9',
        Rank::Ten => 'T',
        Rank::Jack => 'J',
        Rank::Queen => 'Q',
        Rank::King => 'K',
        Rank::Ace => 'A',
    }
}

fn suit_char(suit: Suit) -> char {
    match suit {
        Suit::Clubs => 'C',
        Suit::Diamonds => 'D',
        Suit::Hearts => 'H',
        Suit::Spades => 'S',
    }
}

fn parse_card_str(s: &str) -> Result<Card, String> {
    let err = || format!("cannot parse card token: {s}");
    if s.len() != 2 {
        return Err(err());
    }
    let mut chars = s.chars();
    let rank_ch = chars.next().unwrap();
    let suit_ch = chars.next().unwrap();
    let rank = match rank_ch {
        '2' => Rank::Two,
        '3' => Rank::Three,
        '4' => Rank::Four,
        '5' => Rank::Five,
        '6' => Rank::Six,
        '7' => Rank::Seven,
        '8' => Rank::Eight,
        '9' => Rank::Nine,
        'T' => Rank::Ten,
        'J' => Rank::Jack,
        'Q' => Rank::Queen,
        'K' => Rank::King,
        'A' => Rank::Ace,
        _ => return Err(err()),
    };
    let suit = match suit_ch {
        'C' => Suit::Clubs,
        'D' => Suit::Diamonds,
        'H' => Suit::Hearts,
        'S' => Suit::Spades,
        _ => return Err(err()),
    };
    Ok(Card { suit, rank })
}

impl Serialize for Card {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_card_str(&s).map_err(serde::de::Error::custom)
    }
}

/// Is `card` trump under `trump`, including the wrong-5?
pub fn is_trump(card: Card, trump: Suit) -> bool {
    card.suit == trump || (card.rank == Rank::Five && card.suit == trump.same_color_other())
}

/// Strength of a trump card for comparison purposes: higher wins.
/// `None` if `card` is not trump under `trump`.
///
/// Order highest to lowest: A, K, Q, J, 10, 9, 8, 7, 6, right-5, wrong-5,
/// 4, 3, 2. The right-5 (5 of the trump suit) always beats the wrong-5
/// (5 of the same-colour off suit).
pub fn trump_strength(card: Card, trump: Suit) -> Option<u8> {
    if !is_trump(card, trump) {
        return None;
    }
    Some(match card.rank {
        Rank::Ace => 13,
        Rank::King => 12,
        Rank::Queen => 11,
        Rank::Jack => 10,
        Rank::Ten => 9,
        Rank::Nine => 8,
        Rank::Eight => 7,
        Rank::Seven => 6,
        Rank::Six => 5,
        Rank::Five if card.suit == trump => 4, // right-5
        Rank::Five => 3,                       // wrong-5
        Rank::Four => 2,
        Rank::Three => 1,
        Rank::Two => 0,
    })
}

/// Does `a` beat `b` as trump cards under `trump`? Both must be trump;
/// non-trump cards are never comparable.
pub fn trump_beats(a: Card, b: Card, trump: Suit) -> bool {
    match (trump_strength(a, trump), trump_strength(b, trump)) {
        (Some(sa), Some(sb)) => sa > sb,
        _ => false,
    }
}

/// Point value of a card under the declared trump. Only trump
/// cards ever carry a point. Sums to 14 across a full deck: trump A + J
/// + 10 + right-5 + wrong-5 + 2-of-trump.
pub fn card_point_value(card: Card, trump: Suit) -> u8 {
    if !is_trump(card, trump) {
        return 0;
    }
    match card.rank {
        Rank::Ace | Rank::Jack | Rank::Ten => 1,
        Rank::Five => 5,
        Rank::Two if card.suit == trump => 1,
        _ => 0,
    }
}
