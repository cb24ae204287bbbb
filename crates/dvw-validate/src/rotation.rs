//! Rotation tracking.
//!
//! Lineups are read from the per-row slot columns. Rows whose slots are
//! partly missing carry no lineup; lookups in either direction skip timeout
//! rows and tolerate a couple of rows without a lineup before giving up.

use std::sync::LazyLock;

use regex::Regex;

use dvw_model::{PlayLog, PlayRecord, TeamSide};

/// Rows without a lineup tolerated by [`lineup_before`] and [`lineup_after`].
const LOOKAROUND: usize = 2;

/// Substitution code such as `*c02:01` (team marker, player out, player in).
static SUBSTITUTION_CODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([*a])c(\d{1,3}):(\d{1,3})").expect("valid substitution regex")
});

/// Players in rotation slots 1..=n for one team.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Lineup(Vec<u32>);

impl Lineup {
    pub fn new(players: Vec<u32>) -> Self {
        Self(players)
    }

    /// Lineup of `side` on `record`, when all `slot_count` slots are present.
    pub fn from_record(record: &PlayRecord, side: TeamSide, slot_count: usize) -> Option<Self> {
        record
            .slots(side)
            .iter()
            .take(slot_count)
            .copied()
            .collect::<Option<Vec<u32>>>()
            .filter(|players| players.len() == slot_count && !players.is_empty())
            .map(Self)
    }

    pub fn players(&self) -> &[u32] {
        &self.0
    }

    pub fn contains(&self, player: u32) -> bool {
        self.0.contains(&player)
    }

    /// 1-based slot occupied by `player`.
    pub fn slot_of(&self, player: u32) -> Option<usize> {
        self.0.iter().position(|&p| p == player).map(|idx| idx + 1)
    }

    /// Player in a 1-based slot.
    pub fn player_at(&self, slot: usize) -> Option<u32> {
        self.0.get(slot.checked_sub(1)?).copied()
    }

    /// Whether this lineup is `prev` rotated by one position.
    pub fn is_rotation_of(&self, prev: &Lineup) -> bool {
        is_left_rotation(&prev.0, &self.0)
    }
}

/// Whether `cur` is `prev` rotated one position to the left.
///
/// The occupant of slot 2 moves to slot 1, slot 3 to slot 2, and so on,
/// with slot 1 wrapping round to slot n.
pub fn is_left_rotation(prev: &[u32], cur: &[u32]) -> bool {
    let n = prev.len();
    n > 0 && cur.len() == n && (0..n).all(|i| cur[i] == prev[(i + 1) % n])
}

/// 1-based slot of `player` among the first `slot_count` slots, tolerating
/// missing slot values.
pub fn slot_of(record: &PlayRecord, side: TeamSide, player: u32, slot_count: usize) -> Option<usize> {
    record
        .slots(side)
        .iter()
        .take(slot_count)
        .position(|&slot| slot == Some(player))
        .map(|idx| idx + 1)
}

/// Nearest lineup before row `idx`, with the row it came from.
pub fn lineup_before(
    log: &PlayLog,
    idx: usize,
    side: TeamSide,
    slot_count: usize,
) -> Option<(usize, Lineup)> {
    find_lineup(log, (0..idx).rev(), side, slot_count)
}

/// Nearest lineup after row `idx`, with the row it came from.
pub fn lineup_after(
    log: &PlayLog,
    idx: usize,
    side: TeamSide,
    slot_count: usize,
) -> Option<(usize, Lineup)> {
    find_lineup(log, idx + 1..log.len(), side, slot_count)
}

fn find_lineup(
    log: &PlayLog,
    indices: impl Iterator<Item = usize>,
    side: TeamSide,
    slot_count: usize,
) -> Option<(usize, Lineup)> {
    let mut misses = 0;
    for idx in indices {
        let record = log.get(idx)?;
        if record.is_timeout() {
            continue;
        }
        if let Some(lineup) = Lineup::from_record(record, side, slot_count) {
            return Some((idx, lineup));
        }
        misses += 1;
        if misses > LOOKAROUND {
            return None;
        }
    }
    None
}

/// A substitution parsed from its scout code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Substitution {
    pub team: TeamSide,
    pub outgoing: u32,
    pub incoming: u32,
}

impl Substitution {
    /// Whether the lineups either side of the substitution agree with it.
    ///
    /// The outgoing player must leave and the incoming player must arrive.
    pub fn reconciles(&self, pre: &Lineup, post: &Lineup) -> bool {
        pre.contains(self.outgoing)
            && post.contains(self.incoming)
            && !pre.contains(self.incoming)
            && !post.contains(self.outgoing)
    }
}

/// Parse a substitution code (`*c02:01` means home player 2 out, 1 in).
pub fn parse_substitution(code: &str) -> Option<Substitution> {
    let captures = SUBSTITUTION_CODE.captures(code.trim())?;
    let team = match &captures[1] {
        "*" => TeamSide::Home,
        _ => TeamSide::Visiting,
    };
    Some(Substitution {
        team,
        outgoing: captures[2].parse().ok()?,
        incoming: captures[3].parse().ok()?,
    })
}
