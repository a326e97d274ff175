//! Value-object accessor arms. Every arm matches the upper-cased property
//! name; getters return the member, setters `any_cast` into it.

use wrapgen_core::domain::{Dimensionality as D, SemanticKind as K, Stage};

use super::{Row, row};

const GET_ARM: &str = concat!(
    "        else if(strcmp(nameUpper.c_str(), \"{nameUpper}\")==0)\n",
    "            return {name}_;\n",
);

pub(super) const ROWS: &[Row] = &[
    // ── field-get ────────────────────────────────────────────────────────────
    row(Stage::FieldGet, D::Scalar, K::Primitive, GET_ARM),
    row(Stage::FieldGet, D::Scalar, K::String, GET_ARM),
    row(Stage::FieldGet, D::Scalar, K::Variant, GET_ARM),
    row(Stage::FieldGet, D::Vector, K::Primitive, GET_ARM),
    row(Stage::FieldGet, D::Vector, K::String, GET_ARM),
    row(Stage::FieldGet, D::Vector, K::Variant, GET_ARM),
    row(Stage::FieldGet, D::Matrix, K::Primitive, GET_ARM),
    row(Stage::FieldGet, D::Matrix, K::String, GET_ARM),
    row(Stage::FieldGet, D::Matrix, K::Variant, GET_ARM),
    // ── field-set ────────────────────────────────────────────────────────────
    row(
        Stage::FieldSet,
        D::Scalar,
        K::Primitive,
        concat!(
            "        else if(strcmp(nameUpper.c_str(), \"{nameUpper}\")==0)\n",
            "            {name}_ = boost::any_cast<{nativeType}>(value);\n",
        ),
    ),
    row(
        Stage::FieldSet,
        D::Scalar,
        K::String,
        concat!(
            "        else if(strcmp(nameUpper.c_str(), \"{nameUpper}\")==0)\n",
            "            {name}_ = boost::any_cast<std::string>(value);\n",
        ),
    ),
    row(
        Stage::FieldSet,
        D::Scalar,
        K::Variant,
        concat!(
            "        else if(strcmp(nameUpper.c_str(), \"{nameUpper}\")==0)\n",
            "            {name}_ = boost::any_cast<ObjectHandler::Variant>(value);\n",
        ),
    ),
    row(
        Stage::FieldSet,
        D::Vector,
        K::Primitive,
        concat!(
            "        else if(strcmp(nameUpper.c_str(), \"{nameUpper}\")==0)\n",
            "            {name}_ = boost::any_cast<std::vector<{nativeType}> >(value);\n",
        ),
    ),
    row(
        Stage::FieldSet,
        D::Vector,
        K::String,
        concat!(
            "        else if(strcmp(nameUpper.c_str(), \"{nameUpper}\")==0)\n",
            "            {name}_ = boost::any_cast<std::vector<std::string> >(value);\n",
        ),
    ),
    row(
        Stage::FieldSet,
        D::Vector,
        K::Variant,
        concat!(
            "        else if(strcmp(nameUpper.c_str(), \"{nameUpper}\")==0)\n",
            "            {name}_ = boost::any_cast<std::vector<ObjectHandler::Variant> >(value);\n",
        ),
    ),
    row(
        Stage::FieldSet,
        D::Matrix,
        K::Primitive,
        concat!(
            "        else if(strcmp(nameUpper.c_str(), \"{nameUpper}\")==0)\n",
            "            {name}_ = boost::any_cast<std::vector<std::vector<{nativeType}> > >(value);\n",
        ),
    ),
    row(
        Stage::FieldSet,
        D::Matrix,
        K::String,
        concat!(
            "        else if(strcmp(nameUpper.c_str(), \"{nameUpper}\")==0)\n",
            "            {name}_ = boost::any_cast<std::vector<std::vector<std::string> > >(value);\n",
        ),
    ),
    row(
        Stage::FieldSet,
        D::Matrix,
        K::Variant,
        concat!(
            "        else if(strcmp(nameUpper.c_str(), \"{nameUpper}\")==0)\n",
            "            {name}_ = boost::any_cast<std::vector<std::vector<ObjectHandler::Variant> > >(value);\n",
        ),
    ),
];
