//! Serialization-layer fragments. Constructors read each argument back out
//! of a `valueObject` property bag and return the object they build.

use wrapgen_core::domain::{Dimensionality as D, Route, SemanticKind as K, Stage};

use super::{Row, row};

pub(super) const ROWS: &[Row] = &[
    // ── to-native ────────────────────────────────────────────────────────────
    row(
        Stage::ToNative,
        D::Scalar,
        K::Primitive,
        concat!(
            "        {nativeType} {name}Cpp =\n",
            "            boost::any_cast<{nativeType}>(valueObject->getProperty(\"{name}\"));\n",
        ),
    ),
    row(
        Stage::ToNative,
        D::Scalar,
        K::Primitive,
        concat!(
            "        {nativeType} {name}Cpp = ObjectHandler::ohVariantToScalar<{nativeType}>(\n",
            "            boost::any_cast<ObjectHandler::Variant>(valueObject->getProperty(\"{name}\")),\n",
            "            \"{name}\", {defaultValue});\n",
        ),
    )
    .defaulted(),
    row(
        Stage::ToNative,
        D::Scalar,
        K::String,
        concat!(
            "        std::string {name}Cpp =\n",
            "            boost::any_cast<std::string>(valueObject->getProperty(\"{name}\"));\n",
        ),
    ),
    row(
        Stage::ToNative,
        D::Scalar,
        K::String,
        concat!(
            "        std::string {name}Cpp = ObjectHandler::ohVariantToScalar<std::string>(\n",
            "            boost::any_cast<ObjectHandler::Variant>(valueObject->getProperty(\"{name}\")),\n",
            "            \"{name}\", {defaultValue});\n",
        ),
    )
    .defaulted(),
    row(
        Stage::ToNative,
        D::Scalar,
        K::Variant,
        concat!(
            "        ObjectHandler::Variant {name}Cpp =\n",
            "            boost::any_cast<ObjectHandler::Variant>(valueObject->getProperty(\"{name}\"));\n",
        ),
    ),
    row(
        Stage::ToNative,
        D::Scalar,
        K::Variant,
        concat!(
            "        ObjectHandler::Variant {name}Cpp = ObjectHandler::ohVariantToScalar<ObjectHandler::Variant>(\n",
            "            boost::any_cast<ObjectHandler::Variant>(valueObject->getProperty(\"{name}\")),\n",
            "            \"{name}\", {defaultValue});\n",
        ),
    )
    .defaulted(),
    row(
        Stage::ToNative,
        D::Vector,
        K::Primitive,
        concat!(
            "        std::vector<{nativeType}> {name}Cpp =\n",
            "            boost::any_cast<std::vector<{nativeType}> >(valueObject->getProperty(\"{name}\"));\n",
        ),
    ),
    row(
        Stage::ToNative,
        D::Vector,
        K::String,
        concat!(
            "        std::vector<std::string> {name}Cpp =\n",
            "            boost::any_cast<std::vector<std::string> >(valueObject->getProperty(\"{name}\"));\n",
        ),
    ),
    row(
        Stage::ToNative,
        D::Vector,
        K::Variant,
        concat!(
            "        std::vector<ObjectHandler::Variant> {name}Cpp =\n",
            "            boost::any_cast<std::vector<ObjectHandler::Variant> >(valueObject->getProperty(\"{name}\"));\n",
        ),
    ),
    row(
        Stage::ToNative,
        D::Matrix,
        K::Primitive,
        concat!(
            "        std::vector<std::vector<{nativeType}> > {name}Cpp =\n",
            "            boost::any_cast<std::vector<std::vector<{nativeType}> > >(valueObject->getProperty(\"{name}\"));\n",
        ),
    ),
    row(
        Stage::ToNative,
        D::Matrix,
        K::String,
        concat!(
            "        std::vector<std::vector<std::string> > {name}Cpp =\n",
            "            boost::any_cast<std::vector<std::vector<std::string> > >(valueObject->getProperty(\"{name}\"));\n",
        ),
    ),
    row(
        Stage::ToNative,
        D::Matrix,
        K::Variant,
        concat!(
            "        std::vector<std::vector<ObjectHandler::Variant> > {name}Cpp =\n",
            "            boost::any_cast<std::vector<std::vector<ObjectHandler::Variant> > >(valueObject->getProperty(\"{name}\"));\n",
        ),
    ),
    // ── returns ──────────────────────────────────────────────────────────────
    // Only constructors are serialized, so the only return is the object.
    row(
        Stage::ReturnDeclaration,
        D::Scalar,
        K::LibraryObject,
        "        boost::shared_ptr<ObjectHandler::Object> returnValue = ",
    )
    .via(Route::Object),
    row(
        Stage::ReturnConversion,
        D::Scalar,
        K::LibraryObject,
        "        return returnValue;\n",
    )
    .via(Route::Object),
];
