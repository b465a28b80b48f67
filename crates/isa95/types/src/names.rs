//! Well-known namespace URIs and browse names.

/// Namespace 0: the base information model.
pub const UA_NAMESPACE_URI: &str = "http://opcfoundation.org/UA/";

/// Default URI of the ISA-95 companion namespace.
pub const ISA95_NAMESPACE_URI: &str = "http://www.OPCFoundation.org/UA/2013/01/ISA95";

/// Base information model (namespace 0).
pub mod ua {
    pub const REFERENCES: &str = "References";
    pub const HIERARCHICAL_REFERENCES: &str = "HierarchicalReferences";
    pub const NON_HIERARCHICAL_REFERENCES: &str = "NonHierarchicalReferences";
    pub const HAS_SUBTYPE: &str = "HasSubtype";
    pub const HAS_TYPE_DEFINITION: &str = "HasTypeDefinition";
    pub const ORGANIZES: &str = "Organizes";
    pub const AGGREGATES: &str = "Aggregates";
    pub const HAS_COMPONENT: &str = "HasComponent";
    pub const HAS_PROPERTY: &str = "HasProperty";

    pub const BASE_OBJECT_TYPE: &str = "BaseObjectType";
    pub const FOLDER_TYPE: &str = "FolderType";
    pub const BASE_VARIABLE_TYPE: &str = "BaseVariableType";
    pub const PROPERTY_TYPE: &str = "PropertyType";

    pub const BASE_DATA_TYPE: &str = "BaseDataType";
    pub const BOOLEAN: &str = "Boolean";
    pub const INT32: &str = "Int32";
    pub const UINT32: &str = "UInt32";
    pub const DOUBLE: &str = "Double";
    pub const STRING: &str = "String";
    pub const ENUMERATION: &str = "Enumeration";

    pub const OBJECTS_FOLDER: &str = "Objects";
}

/// ISA-95 equipment branch.
pub mod isa95 {
    pub const ISA95_OBJECT_TYPE: &str = "ISA95ObjectType";
    pub const ISA95_CLASS_TYPE: &str = "ISA95ClassType";
    pub const EQUIPMENT_TYPE: &str = "EquipmentType";
    pub const EQUIPMENT_CLASS_TYPE: &str = "EquipmentClassType";

    pub const HAS_ISA95_ATTRIBUTE: &str = "HasISA95Attribute";
    pub const DEFINED_BY_EQUIPMENT_CLASS: &str = "DefinedByEquipmentClass";
    pub const MADE_UP_OF_EQUIPMENT: &str = "MadeUpOfEquipment";

    pub const EQUIPMENT_ELEMENT_LEVEL_ENUM: &str = "ISA95EquipmentElementLevelEnum";

    /// Attribute carrying an [`EquipmentLevel`](crate::EquipmentLevel).
    pub const EQUIPMENT_LEVEL: &str = "EquipmentLevel";
}
