use crate::Reflect;

/// A fixed-arity group of positional fields.
pub trait Tuple: Reflect {
    fn field(&self, index: usize) -> Option<&dyn Reflect>;

    fn field_len(&self) -> usize;
}
