use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairRecord {
    pub value: f64,
    pub is_positive: bool,
    pub sequence_id: u64,
    /// Both genes share a paralog group. Ranked, but never counted.
    pub excluded: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub total_true: u64,
    pub total_false: u64,
}

impl Totals {
    pub fn count(&mut self, record: &PairRecord) {
        if record.excluded {
            return;
        }
        if record.is_positive {
            self.total_true += 1;
        } else {
            self.total_false += 1;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    LargerIsBetter,
    SmallerIsBetter,
}

impl Direction {
    pub fn from_smaller_is_better(flag: bool) -> Self {
        if flag {
            Direction::SmallerIsBetter
        } else {
            Direction::LargerIsBetter
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Direction::LargerIsBetter => "larger",
            Direction::SmallerIsBetter => "smaller",
        }
    }
}
