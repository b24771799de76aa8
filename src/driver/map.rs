//! Provides Bindings for the individual commands and properties

macro_rules! makepl {
    ($($name:ident, $val:literal),*) => {
        $(pub const $name: &str = $val;)*
    };
}

// command opcodes
#[rustfmt::skip]
makepl!(
    SET_POSITION, "p",
    SET_VELOCITY, "v",
    SET_TORQUE, "c",
    SET_SIMPLE_POSITION, "t",
    READ, "r",
    WRITE, "w"
);

// property paths below axis<n>
#[rustfmt::skip]
makepl!(
    VEL_ESTIMATE, "encoder.vel_estimate",
    POS_ESTIMATE, "encoder.pos_estimate",
    REQUESTED_STATE, "requested_state",
    CURRENT_STATE, "current_state"
);
