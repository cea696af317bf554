use csx_reflect::Reflect;
use csx_reflect::info::TypeHandle;

use crate::serializer::downcast;
use crate::syntax::Expr;
use crate::type_syntax::type_name;
use crate::{EncodeScope, SerializeError};

/// Encodes a [`TypeHandle`] as `typeof(T)`.
///
/// ```
/// use csx_reflect::info::TypeHandle;
///
/// let handle = TypeHandle::of::<Vec<Option<u8>>>();
/// assert_eq!(csx_script::serialize(&handle).unwrap(), "typeof(List<byte?>)");
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct TypeHandleSerializer;

impl super::ScriptSerializer for TypeHandleSerializer {
    fn get_creation(
        &self,
        value: &dyn Reflect,
        _scope: &mut EncodeScope<'_>,
    ) -> Result<Expr, SerializeError> {
        let handle = downcast::<TypeHandle>(value)?;
        Ok(Expr::TypeOf(type_name(handle.type_info())))
    }
}
