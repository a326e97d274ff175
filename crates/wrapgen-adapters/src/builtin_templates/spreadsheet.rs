//! Spreadsheet add-in fragments. Inputs arrive as `OPER*`, outputs leave as
//! `OPER*` or static C values.

use wrapgen_core::domain::{Dimensionality as D, Route, SemanticKind as K, Stage};

use super::{Row, row};

const TENSOR_TO_OPER: &str = concat!(
    "        static OPER xRet;\n",
    "        ObjectHandler::{tensorRank}ToOper(returnValue, xRet);\n",
    "        return &xRet;\n",
);

pub(super) const ROWS: &[Row] = &[
    // ── to-native ────────────────────────────────────────────────────────────
    row(
        Stage::ToNative,
        D::Scalar,
        K::Primitive,
        concat!(
            "        {nativeType} {name}Cpp = ObjectHandler::operToScalar<{nativeType}>(\n",
            "            *{name}, \"{name}\");\n",
        ),
    ),
    row(
        Stage::ToNative,
        D::Scalar,
        K::Primitive,
        concat!(
            "        {nativeType} {name}Cpp = ObjectHandler::operToScalar<{nativeType}>(\n",
            "            *{name}, \"{name}\", {defaultValue}{errorValue});\n",
        ),
    )
    .defaulted(),
    row(
        Stage::ToNative,
        D::Scalar,
        K::String,
        concat!(
            "        std::string {name}Cpp = ObjectHandler::operToScalar<std::string>(\n",
            "            *{name}, \"{name}\");\n",
        ),
    ),
    row(
        Stage::ToNative,
        D::Scalar,
        K::String,
        concat!(
            "        std::string {name}Cpp = ObjectHandler::operToScalar<std::string>(\n",
            "            *{name}, \"{name}\", {defaultValue}{errorValue});\n",
        ),
    )
    .defaulted(),
    row(
        Stage::ToNative,
        D::Scalar,
        K::Variant,
        concat!(
            "        ObjectHandler::Variant {name}Cpp = ObjectHandler::operToScalar<ObjectHandler::Variant>(\n",
            "            *{name}, \"{name}\");\n",
        ),
    ),
    row(
        Stage::ToNative,
        D::Scalar,
        K::Variant,
        concat!(
            "        ObjectHandler::Variant {name}Cpp = ObjectHandler::operToScalar<ObjectHandler::Variant>(\n",
            "            *{name}, \"{name}\", {defaultValue}{errorValue});\n",
        ),
    )
    .defaulted(),
    row(
        Stage::ToNative,
        D::Vector,
        K::Primitive,
        concat!(
            "        std::vector<{nativeType}> {name}Cpp =\n",
            "            ObjectHandler::operToVector<{nativeType}>(*{name}, \"{name}\");\n",
        ),
    ),
    row(
        Stage::ToNative,
        D::Vector,
        K::String,
        concat!(
            "        std::vector<std::string> {name}Cpp =\n",
            "            ObjectHandler::operToVector<std::string>(*{name}, \"{name}\");\n",
        ),
    ),
    row(
        Stage::ToNative,
        D::Vector,
        K::Variant,
        concat!(
            "        std::vector<ObjectHandler::Variant> {name}Cpp =\n",
            "            ObjectHandler::operToVector<ObjectHandler::Variant>(*{name}, \"{name}\");\n",
        ),
    ),
    row(
        Stage::ToNative,
        D::Matrix,
        K::Primitive,
        concat!(
            "        std::vector<std::vector<{nativeType}> > {name}Cpp =\n",
            "            ObjectHandler::operToMatrix<{nativeType}>(*{name}, \"{name}\");\n",
        ),
    ),
    row(
        Stage::ToNative,
        D::Matrix,
        K::String,
        concat!(
            "        std::vector<std::vector<std::string> > {name}Cpp =\n",
            "            ObjectHandler::operToMatrix<std::string>(*{name}, \"{name}\");\n",
        ),
    ),
    row(
        Stage::ToNative,
        D::Matrix,
        K::Variant,
        concat!(
            "        std::vector<std::vector<ObjectHandler::Variant> > {name}Cpp =\n",
            "            ObjectHandler::operToMatrix<ObjectHandler::Variant>(*{name}, \"{name}\");\n",
        ),
    ),
    // ── return-conversion ────────────────────────────────────────────────────
    row(
        Stage::ReturnConversion,
        D::Scalar,
        K::Primitive,
        concat!(
            "        static {nativeType} returnValueXL;\n",
            "        returnValueXL = returnValue;\n",
            "        return &returnValueXL;\n",
        ),
    ),
    row(
        Stage::ReturnConversion,
        D::Scalar,
        K::Primitive,
        concat!(
            "        static {nativeType} returnValueXL;\n",
            "        returnValueXL = {namespaceObjects}::libraryToScalar(returnValue);\n",
            "        return &returnValueXL;\n",
        ),
    )
    .via(Route::Library),
    row(
        Stage::ReturnConversion,
        D::Scalar,
        K::String,
        concat!(
            "        static char ret[XL_MAX_STR_LEN];\n",
            "        ObjectHandler::stringToChar(returnValue, ret);\n",
            "        return ret;\n",
        ),
    ),
    row(
        Stage::ReturnConversion,
        D::Scalar,
        K::String,
        concat!(
            "        std::ostringstream os;\n",
            "        os << returnValue;\n",
            "        static char ret[XL_MAX_STR_LEN];\n",
            "        ObjectHandler::stringToChar(os.str(), ret);\n",
            "        return ret;\n",
        ),
    )
    .via(Route::Library),
    row(
        Stage::ReturnConversion,
        D::Scalar,
        K::Variant,
        concat!(
            "        static OPER xRet;\n",
            "        ObjectHandler::scalarToOper(returnValue, xRet);\n",
            "        return &xRet;\n",
        ),
    ),
    row(Stage::ReturnConversion, D::Vector, K::Primitive, TENSOR_TO_OPER),
    row(Stage::ReturnConversion, D::Vector, K::String, TENSOR_TO_OPER),
    row(Stage::ReturnConversion, D::Vector, K::Variant, TENSOR_TO_OPER),
    row(Stage::ReturnConversion, D::Matrix, K::Primitive, TENSOR_TO_OPER),
    row(Stage::ReturnConversion, D::Matrix, K::String, TENSOR_TO_OPER),
    row(Stage::ReturnConversion, D::Matrix, K::Variant, TENSOR_TO_OPER),
    row(
        Stage::ReturnConversion,
        D::Vector,
        K::Primitive,
        concat!(
            "        std::vector<{nativeType}> returnValVec = {namespaceObjects}::libraryToVector(returnValue);\n",
            "        static OPER xRet;\n",
            "        ObjectHandler::vectorToOper(returnValVec, xRet);\n",
            "        return &xRet;\n",
        ),
    )
    .via(Route::Library),
    row(
        Stage::ReturnConversion,
        D::Vector,
        K::String,
        concat!(
            "        std::vector<std::string> returnValVec = {namespaceObjects}::libraryToVector(returnValue);\n",
            "        static OPER xRet;\n",
            "        ObjectHandler::vectorToOper(returnValVec, xRet);\n",
            "        return &xRet;\n",
        ),
    )
    .via(Route::Library),
];
