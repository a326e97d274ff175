//! Scripting-host fragments. Inputs arrive as UNO types (`STRING`, `ANY`,
//! `SEQSEQ(...)`) and are converted with the `calcTo*` family.

use wrapgen_core::domain::{Dimensionality as D, Route, SemanticKind as K, Stage};

use super::{Row, row};

pub(super) const ROWS: &[Row] = &[
    // ── to-native ────────────────────────────────────────────────────────────
    row(
        Stage::ToNative,
        D::Scalar,
        K::Primitive,
        concat!(
            "        {nativeType} {name}Cpp;\n",
            "        calcToScalar({name}Cpp, {name});\n",
        ),
    ),
    row(
        Stage::ToNative,
        D::Scalar,
        K::Primitive,
        concat!(
            "        {nativeType} {name}Cpp;\n",
            "        calcToScalar({name}Cpp, {name}, {defaultValue}{errorValue});\n",
        ),
    )
    .defaulted(),
    row(
        Stage::ToNative,
        D::Scalar,
        K::String,
        "        std::string {name}Cpp = ouStringToStlString({name});\n",
    ),
    row(
        Stage::ToNative,
        D::Scalar,
        K::String,
        concat!(
            "        std::string {name}Cpp;\n",
            "        calcToScalar({name}Cpp, {name}, {defaultValue}{errorValue});\n",
        ),
    )
    .defaulted(),
    row(
        Stage::ToNative,
        D::Scalar,
        K::Variant,
        concat!(
            "        ObjectHandler::Variant {name}Cpp;\n",
            "        calcToScalar({name}Cpp, {name});\n",
        ),
    ),
    row(
        Stage::ToNative,
        D::Scalar,
        K::Variant,
        concat!(
            "        ObjectHandler::Variant {name}Cpp;\n",
            "        calcToScalar({name}Cpp, {name}, {defaultValue}{errorValue});\n",
        ),
    )
    .defaulted(),
    row(
        Stage::ToNative,
        D::Vector,
        K::Primitive,
        concat!(
            "        std::vector<{nativeType}> {name}Cpp;\n",
            "        calcToVector({name}Cpp, {name});\n",
        ),
    ),
    row(
        Stage::ToNative,
        D::Vector,
        K::String,
        concat!(
            "        std::vector<std::string> {name}Cpp;\n",
            "        calcToVector({name}Cpp, {name});\n",
        ),
    ),
    row(
        Stage::ToNative,
        D::Vector,
        K::Variant,
        concat!(
            "        std::vector<ObjectHandler::Variant> {name}Cpp;\n",
            "        calcToVector({name}Cpp, {name});\n",
        ),
    ),
    row(
        Stage::ToNative,
        D::Matrix,
        K::Primitive,
        concat!(
            "        std::vector<std::vector<{nativeType}> > {name}Cpp;\n",
            "        calcToMatrix({name}Cpp, {name});\n",
        ),
    ),
    row(
        Stage::ToNative,
        D::Matrix,
        K::String,
        concat!(
            "        std::vector<std::vector<std::string> > {name}Cpp;\n",
            "        calcToMatrix({name}Cpp, {name});\n",
        ),
    ),
    row(
        Stage::ToNative,
        D::Matrix,
        K::Variant,
        concat!(
            "        std::vector<std::vector<ObjectHandler::Variant> > {name}Cpp;\n",
            "        calcToMatrix({name}Cpp, {name});\n",
        ),
    ),
    // ── return-conversion ────────────────────────────────────────────────────
    row(
        Stage::ReturnConversion,
        D::Scalar,
        K::Primitive,
        concat!(
            "        {nativeType} returnValueCalc;\n",
            "        scalarToCalc(returnValueCalc, returnValue);\n",
            "        return returnValueCalc;\n",
        ),
    ),
    row(
        Stage::ReturnConversion,
        D::Scalar,
        K::Primitive,
        concat!(
            "        {nativeType} returnValueCalc;\n",
            "        scalarToCalc(returnValueCalc, {namespaceObjects}::libraryToScalar(returnValue));\n",
            "        return returnValueCalc;\n",
        ),
    )
    .via(Route::Library),
    row(
        Stage::ReturnConversion,
        D::Scalar,
        K::String,
        concat!(
            "        STRING returnValueCalc;\n",
            "        scalarToCalc(returnValueCalc, returnValue);\n",
            "        return returnValueCalc;\n",
        ),
    ),
    row(
        Stage::ReturnConversion,
        D::Scalar,
        K::String,
        concat!(
            "        std::ostringstream os;\n",
            "        os << returnValue;\n",
            "        STRING returnValueCalc;\n",
            "        scalarToCalc(returnValueCalc, os.str());\n",
            "        return returnValueCalc;\n",
        ),
    )
    .via(Route::Library),
    row(
        Stage::ReturnConversion,
        D::Scalar,
        K::Variant,
        concat!(
            "        ANY returnValueCalc;\n",
            "        scalarToCalc(returnValueCalc, returnValue);\n",
            "        return returnValueCalc;\n",
        ),
    ),
    row(
        Stage::ReturnConversion,
        D::Vector,
        K::Primitive,
        concat!(
            "        SEQSEQ({nativeType}) returnValueCalc;\n",
            "        {tensorRank}ToCalc(returnValueCalc, returnValue);\n",
            "        return returnValueCalc;\n",
        ),
    ),
    row(
        Stage::ReturnConversion,
        D::Vector,
        K::String,
        concat!(
            "        SEQSEQ(STRING) returnValueCalc;\n",
            "        {tensorRank}ToCalc(returnValueCalc, returnValue);\n",
            "        return returnValueCalc;\n",
        ),
    ),
    row(
        Stage::ReturnConversion,
        D::Vector,
        K::Variant,
        concat!(
            "        SEQSEQ(ANY) returnValueCalc;\n",
            "        {tensorRank}ToCalc(returnValueCalc, returnValue);\n",
            "        return returnValueCalc;\n",
        ),
    ),
    row(
        Stage::ReturnConversion,
        D::Matrix,
        K::Primitive,
        concat!(
            "        SEQSEQ({nativeType}) returnValueCalc;\n",
            "        {tensorRank}ToCalc(returnValueCalc, returnValue);\n",
            "        return returnValueCalc;\n",
        ),
    ),
    row(
        Stage::ReturnConversion,
        D::Matrix,
        K::String,
        concat!(
            "        SEQSEQ(STRING) returnValueCalc;\n",
            "        {tensorRank}ToCalc(returnValueCalc, returnValue);\n",
            "        return returnValueCalc;\n",
        ),
    ),
    row(
        Stage::ReturnConversion,
        D::Matrix,
        K::Variant,
        concat!(
            "        SEQSEQ(ANY) returnValueCalc;\n",
            "        {tensorRank}ToCalc(returnValueCalc, returnValue);\n",
            "        return returnValueCalc;\n",
        ),
    ),
    row(
        Stage::ReturnConversion,
        D::Vector,
        K::Primitive,
        concat!(
            "        std::vector<{nativeType}> returnValVec = {namespaceObjects}::libraryToVector(returnValue);\n",
            "        SEQSEQ({nativeType}) returnValueCalc;\n",
            "        vectorToCalc(returnValueCalc, returnValVec);\n",
            "        return returnValueCalc;\n",
        ),
    )
    .via(Route::Library),
    row(
        Stage::ReturnConversion,
        D::Vector,
        K::String,
        concat!(
            "        std::vector<std::string> returnValVec = {namespaceObjects}::libraryToVector(returnValue);\n",
            "        SEQSEQ(STRING) returnValueCalc;\n",
            "        vectorToCalc(returnValueCalc, returnValVec);\n",
            "        return returnValueCalc;\n",
        ),
    )
    .via(Route::Library),
];
