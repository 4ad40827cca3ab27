pub trait Zero {
    const ZERO: Self;
}

pub trait Identity {
    const IDENTITY: Self;
}

impl Zero for f64 {
    const ZERO: f64 = 0.0;
}
