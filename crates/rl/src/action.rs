use crate::error::Precondition;

/// Discrete control inputs, indexed `0..Action::COUNT` in declaration order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    /// Turn left and brake
    TurnLeft,
    Forward,
    /// Turn right and brake
    TurnRight,
    TurnLeftForward,
    TurnRightForward,
    /// There is no reverse gear; backing off the throttle brakes
    Backward,
    Brake,
}

impl Action {
    pub const COUNT: usize = 7;

    pub const ALL: [Action; Action::COUNT] = [
        Action::TurnLeft,
        Action::Forward,
        Action::TurnRight,
        Action::TurnLeftForward,
        Action::TurnRightForward,
        Action::Backward,
        Action::Brake,
    ];

    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<usize> for Action {
    type Error = Precondition;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Action::ALL
            .get(index)
            .copied()
            .ok_or(Precondition::InvalidAction {
                index,
                count: Action::COUNT,
            })
    }
}
