#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use csx_reflect as reflect;
pub use csx_script as script;
pub use csx_utils as utils;

/// The items most programs need.
pub mod prelude {
    pub use csx_reflect::Reflect;
    pub use csx_reflect::derive::Reflect;
    pub use csx_reflect::info::{TypeHandle, TypeInfo, TypePath, Typed};
    pub use csx_script::registry::SerializerRegistry;
    pub use csx_script::serializer::{
        CollectionSerializer, ConstructorSerializer, PropertySerializerBuilder, ScriptSerializable,
        ScriptSerializer, ValueRef,
    };
    pub use csx_script::{
        EncodeScope, EvaluateOptions, Evaluator, SerializeError, deserialize, serialize,
        serialize_with,
    };
}
