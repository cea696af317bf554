use uuid::Uuid;

crate::impls::opaque::impl_reflect_opaque!(
    Uuid, "uuid", "Uuid" => "Guid",
    value_type = true,
    default = |v| v.is_nil(),
);
