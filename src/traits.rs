pub trait Eval<T> {
    type Output;

    fn eval(&self, pt: &T) -> Self::Output;
}

/// Evaluation that can fail, e.g. because of a division by zero
pub trait TryEval<T> {
    type Output;
    type Error;

    fn try_eval(&self, pt: &T) -> Result<Self::Output, Self::Error>;
}

// custom Zero trait that doesn't require Add
pub trait Zero {
    fn zero() -> Self;
    fn is_zero(&self) -> bool;
}

// custom One trait that doesn't require Mul
pub trait One {
    fn one() -> Self;
    fn is_one(&self) -> bool;
}
