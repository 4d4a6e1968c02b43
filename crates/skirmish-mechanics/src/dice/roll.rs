//! Dice roll results and aggregation.

use serde::Serialize;

use super::Die;

/// The result of rolling a single die.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DieResult {
    /// The type of die that was rolled.
    pub die: Die,
    /// The value rolled (1 to die.sides()).
    pub value: u32,
}

/// The result of evaluating a [`DiceExpr`](super::DiceExpr).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RollResult {
    /// Individual die results, in the order they were drawn.
    pub dice: Vec<DieResult>,
    /// Flat amount added to the dice.
    pub modifier: i32,
}

impl RollResult {
    /// Sum of all die values plus the modifier.
    pub fn total(&self) -> i32 {
        self.dice.iter().map(|d| d.value as i32).sum::<i32>() + self.modifier
    }

    /// Number of dice in the result.
    pub fn count(&self) -> usize {
        self.dice.len()
    }
}

impl std::fmt::Display for RollResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let values: Vec<String> = self.dice.iter().map(|d| d.value.to_string()).collect();
        match self.modifier {
            0 => write!(f, "[{}] = {}", values.join(", "), self.total()),
            m if m < 0 => write!(f, "[{}] - {} = {}", values.join(", "), -m, self.total()),
            m => write!(f, "[{}] + {} = {}", values.join(", "), m, self.total()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_result(values: &[u32], modifier: i32) -> RollResult {
        RollResult {
            dice: values
                .iter()
                .map(|&value| DieResult {
                    die: Die::D8,
                    value,
                })
                .collect(),
            modifier,
        }
    }

    #[test]
    fn total_includes_modifier() {
        assert_eq!(make_result(&[3, 5, 2, 8], 7).total(), 25);
        assert_eq!(make_result(&[6], 0).total(), 6);
        assert_eq!(make_result(&[1], -3).total(), -2);
    }

    #[test]
    fn empty_result() {
        let r = RollResult::default();
        assert_eq!(r.total(), 0);
        assert_eq!(r.count(), 0);
    }

    #[test]
    fn display() {
        assert_eq!(make_result(&[3, 5], 0).to_string(), "[3, 5] = 8");
        assert_eq!(make_result(&[3, 5], 7).to_string(), "[3, 5] + 7 = 15");
        assert_eq!(make_result(&[3], -1).to_string(), "[3] - 1 = 2");
    }
}
