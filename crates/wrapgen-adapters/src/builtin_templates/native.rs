//! Native client fragments. Inputs arrive as `ObjectHandler::property_t`
//! and are unpacked with the `ohVariantTo*` family; returns pass through.

use wrapgen_core::domain::{Dimensionality as D, Route, SemanticKind as K, Stage};

use super::{Row, row};

const PASS_THROUGH: &str = "        return returnValue;\n";

pub(super) const ROWS: &[Row] = &[
    // ── to-native ────────────────────────────────────────────────────────────
    row(
        Stage::ToNative,
        D::Scalar,
        K::Primitive,
        concat!(
            "        {nativeType} {name}Cpp = ObjectHandler::ohVariantToScalar<{nativeType}>(\n",
            "            {name}, \"{name}\");\n",
        ),
    ),
    row(
        Stage::ToNative,
        D::Scalar,
        K::Primitive,
        concat!(
            "        {nativeType} {name}Cpp = ObjectHandler::ohVariantToScalar<{nativeType}>(\n",
            "            {name}, \"{name}\", {defaultValue}{errorValue});\n",
        ),
    )
    .defaulted(),
    row(
        Stage::ToNative,
        D::Scalar,
        K::String,
        concat!(
            "        std::string {name}Cpp = ObjectHandler::ohVariantToScalar<std::string>(\n",
            "            {name}, \"{name}\");\n",
        ),
    ),
    row(
        Stage::ToNative,
        D::Scalar,
        K::String,
        concat!(
            "        std::string {name}Cpp = ObjectHandler::ohVariantToScalar<std::string>(\n",
            "            {name}, \"{name}\", {defaultValue}{errorValue});\n",
        ),
    )
    .defaulted(),
    row(
        Stage::ToNative,
        D::Scalar,
        K::Variant,
        "        ObjectHandler::Variant {name}Cpp({name});\n",
    ),
    row(
        Stage::ToNative,
        D::Scalar,
        K::Variant,
        concat!(
            "        ObjectHandler::Variant {name}Cpp = ObjectHandler::ohVariantToScalar<ObjectHandler::Variant>(\n",
            "            {name}, \"{name}\", {defaultValue}{errorValue});\n",
        ),
    )
    .defaulted(),
    row(
        Stage::ToNative,
        D::Vector,
        K::Primitive,
        concat!(
            "        std::vector<{nativeType}> {name}Cpp =\n",
            "            ObjectHandler::ohVariantToVector<{nativeType}>({name}, \"{name}\");\n",
        ),
    ),
    row(
        Stage::ToNative,
        D::Vector,
        K::String,
        concat!(
            "        std::vector<std::string> {name}Cpp =\n",
            "            ObjectHandler::ohVariantToVector<std::string>({name}, \"{name}\");\n",
        ),
    ),
    row(
        Stage::ToNative,
        D::Vector,
        K::Variant,
        concat!(
            "        std::vector<ObjectHandler::Variant> {name}Cpp =\n",
            "            ObjectHandler::ohVariantToVector<ObjectHandler::Variant>({name}, \"{name}\");\n",
        ),
    ),
    row(
        Stage::ToNative,
        D::Matrix,
        K::Primitive,
        concat!(
            "        std::vector<std::vector<{nativeType}> > {name}Cpp =\n",
            "            ObjectHandler::ohVariantToMatrix<{nativeType}>({name}, \"{name}\");\n",
        ),
    ),
    row(
        Stage::ToNative,
        D::Matrix,
        K::String,
        concat!(
            "        std::vector<std::vector<std::string> > {name}Cpp =\n",
            "            ObjectHandler::ohVariantToMatrix<std::string>({name}, \"{name}\");\n",
        ),
    ),
    row(
        Stage::ToNative,
        D::Matrix,
        K::Variant,
        concat!(
            "        std::vector<std::vector<ObjectHandler::Variant> > {name}Cpp =\n",
            "            ObjectHandler::ohVariantToMatrix<ObjectHandler::Variant>({name}, \"{name}\");\n",
        ),
    ),
    // ── return-conversion ────────────────────────────────────────────────────
    row(Stage::ReturnConversion, D::Scalar, K::Primitive, PASS_THROUGH),
    row(Stage::ReturnConversion, D::Scalar, K::String, PASS_THROUGH),
    row(Stage::ReturnConversion, D::Scalar, K::Variant, PASS_THROUGH),
    row(Stage::ReturnConversion, D::Vector, K::Primitive, PASS_THROUGH),
    row(Stage::ReturnConversion, D::Vector, K::String, PASS_THROUGH),
    row(Stage::ReturnConversion, D::Vector, K::Variant, PASS_THROUGH),
    row(Stage::ReturnConversion, D::Matrix, K::Primitive, PASS_THROUGH),
    row(Stage::ReturnConversion, D::Matrix, K::String, PASS_THROUGH),
    row(Stage::ReturnConversion, D::Matrix, K::Variant, PASS_THROUGH),
    row(
        Stage::ReturnConversion,
        D::Scalar,
        K::Primitive,
        concat!(
            "        {nativeType} returnValueLib = {namespaceObjects}::libraryToScalar(returnValue);\n",
            "        return returnValueLib;\n",
        ),
    )
    .via(Route::Library),
    row(
        Stage::ReturnConversion,
        D::Scalar,
        K::String,
        concat!(
            "        std::ostringstream os;\n",
            "        os << returnValue;\n",
            "        return os.str();\n",
        ),
    )
    .via(Route::Library),
    row(
        Stage::ReturnConversion,
        D::Vector,
        K::Primitive,
        concat!(
            "        std::vector<{nativeType}> returnValueLib = {namespaceObjects}::libraryToVector(returnValue);\n",
            "        return returnValueLib;\n",
        ),
    )
    .via(Route::Library),
    row(
        Stage::ReturnConversion,
        D::Vector,
        K::String,
        concat!(
            "        std::vector<std::string> returnValueLib = {namespaceObjects}::libraryToVector(returnValue);\n",
            "        return returnValueLib;\n",
        ),
    )
    .via(Route::Library),
];
