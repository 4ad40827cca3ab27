use crate::traits::Zero;

#[repr(transparent)]
#[derive(Clone, Copy, Debug)]
pub struct Vec3<T>(pub(crate) [T; 3]);

impl<T> Vec3<T> {
    #[inline]
    pub const fn new(a: T, b: T, c: T) -> Self {
        Self([a, b, c])
    }
}

impl<T: Zero> Zero for Vec3<T> {
    const ZERO: Self = Self::new(T::ZERO, T::ZERO, T::ZERO);
}

impl<T: Copy> Vec3<T> {
    #[inline]
    pub const fn x(&self) -> T {
        self.0[0]
    }
    #[inline]
    pub const fn y(&self) -> T {
        self.0[1]
    }
    #[inline]
    pub const fn z(&self) -> T {
        self.0[2]
    }
}

impl<T> From<[T; 3]> for Vec3<T> {
    #[inline]
    fn from(value: [T; 3]) -> Self {
        Self(value)
    }
}

impl<T> From<Vec3<T>> for [T; 3] {
    #[inline]
    fn from(value: Vec3<T>) -> Self {
        value.0
    }
}

impl Vec3<f64> {
    #[inline]
    pub const fn length_squared(&self) -> f64 {
        let x = self.x();
        let y = self.y();
        let z = self.z();
        x * x + y * y + z * z
    }
    #[inline]
    pub fn length(&self) -> f64 {
        self.length_squared().sqrt() // NOTE: sqrt is not const
    }
    #[inline]
    pub const fn scaled(&self, s: f64) -> Self {
        Vec3::new(self.x() * s, self.y() * s, self.z() * s)
    }
    #[inline]
    pub const fn negated(&self) -> Self {
        Vec3::new(-self.x(), -self.y(), -self.z())
    }
    #[inline]
    pub const fn add(&self, other: Self) -> Self {
        Self::new(
            self.x() + other.x(),
            self.y() + other.y(),
            self.z() + other.z(),
        )
    }
    #[inline]
    pub const fn sub(&self, other: Self) -> Self {
        Self::new(
            self.x() - other.x(),
            self.y() - other.y(),
            self.z() - other.z(),
        )
    }
    #[inline]
    pub const fn dot(&self, other: Self) -> f64 {
        self.x() * other.x() + self.y() * other.y() + self.z() * other.z()
    }
    #[inline]
    pub const fn cross(&self, other: Self) -> Self {
        Self::new(
            self.y() * other.z() - self.z() * other.y(),
            self.z() * other.x() - self.x() * other.z(),
            self.x() * other.y() - self.y() * other.x(),
        )
    }
}

impl<T: std::fmt::Display + Copy> std::fmt::Display for Vec3<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x(), self.y(), self.z())
    }
}

impl<T: PartialEq + Copy> PartialEq for Vec3<T> {
    fn eq(&self, other: &Self) -> bool {
        self.x() == other.x() && self.y() == other.y() && self.z() == other.z()
    }
}

#[cfg(test)]
mod tests {
    use crate::traits::Zero;
    use crate::vec3::Vec3;

    #[test]
    fn add_sub() {
        let a = Vec3::<f64>::new(1.0, 5.0, 9.0);
        let b = Vec3::<f64>::new(17.0, 33.0, 65.0);
        let c = Vec3::<f64>::new(18.0, 38.0, 74.0);

        assert_eq!(a.add(b), c);
        assert_eq!(c.sub(b), a);
    }
    #[test]
    fn scale() {
        let v = Vec3::<f64>::new(1.0, 17.0, 65.0);

        assert_eq!(v.scaled(0.5), Vec3::<f64>::new(0.5, 8.5, 32.5));
        assert_eq!(v.negated(), Vec3::<f64>::new(-1.0, -17.0, -65.0));
    }
    #[test]
    fn dot1() {
        let a = Vec3::<f64>::new(1.0, 5.0, 9.0);
        let b = Vec3::<f64>::new(17.0, 33.0, 65.0);

        assert_eq!(a.dot(b), 767.0);
    }
    #[test]
    fn cross1() {
        let a = Vec3::<f64>::new(1.0, 5.0, 9.0);
        let b = Vec3::<f64>::new(17.0, 33.0, 65.0);

        assert_eq!(a.cross(b), Vec3::<f64>::new(28.0, 88.0, -52.0));
    }
    #[test]
    fn cross2() {
        let a = Vec3::<f64>::new(1.0, 5.0, 9.0);
        let b = Vec3::<f64>::new(17.0, 33.0, 65.0);
        let c = Vec3::<f64>::new(125.0, 257.0, 513.0);

        // d == a x b x c
        let d = Vec3::<f64>::new(58508.0, -20864.0, -3804.0);

        assert_eq!(a.cross(b).cross(c), d);
    }
    #[test]
    fn length() {
        assert_eq!(Vec3::<f64>::new(2.0, 3.0, 6.0).length(), 7.0);
        assert_eq!(Vec3::<f64>::ZERO.length(), 0.0);
    }
    #[test]
    fn array_conversion() {
        let v: Vec3<f64> = [1.0, 2.0, 3.0].into();
        assert_eq!(v, Vec3::<f64>::new(1.0, 2.0, 3.0));

        let a: [f64; 3] = v.into();
        assert_eq!(a, [1.0, 2.0, 3.0]);
    }
}
