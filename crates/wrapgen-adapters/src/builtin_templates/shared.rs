//! Fragments that read only native values and are identical in every
//! function backend: library conversion, enumerations, object lookup,
//! handles and the return declaration.

use wrapgen_core::domain::{Dimensionality as D, Route, SemanticKind as K, Stage};

use super::{Row, row};

pub(super) const ROWS: &[Row] = &[
    // ── to-library ───────────────────────────────────────────────────────────
    row(
        Stage::ToLibrary,
        D::Scalar,
        K::Primitive,
        concat!(
            "        {type} {name}Lib;\n",
            "        {namespaceObjects}::cppToLibrary({name}Cpp, {name}Lib);\n",
        ),
    )
    .via(Route::Library),
    row(
        Stage::ToLibrary,
        D::Scalar,
        K::String,
        concat!(
            "        {type} {name}Lib;\n",
            "        {namespaceObjects}::cppToLibrary({name}Cpp, {name}Lib);\n",
        ),
    )
    .via(Route::Library),
    row(
        Stage::ToLibrary,
        D::Scalar,
        K::Variant,
        concat!(
            "        {type} {name}Lib = ObjectHandler::ohVariantToScalar<{type}>(\n",
            "            {name}Cpp, \"{name}\");\n",
        ),
    )
    .via(Route::Library),
    row(
        Stage::ToLibrary,
        D::Vector,
        K::Primitive,
        concat!(
            "        std::vector<{type}> {name}Lib =\n",
            "            {namespaceObjects}::convertVector<{nativeType}, {type}>({name}Cpp);\n",
        ),
    )
    .via(Route::Library),
    row(
        Stage::ToLibrary,
        D::Vector,
        K::String,
        concat!(
            "        std::vector<{type}> {name}Lib =\n",
            "            {namespaceObjects}::convertVector<std::string, {type}>({name}Cpp);\n",
        ),
    )
    .via(Route::Library),
    row(
        Stage::ToLibrary,
        D::Vector,
        K::Variant,
        concat!(
            "        std::vector<{type}> {name}Lib =\n",
            "            ObjectHandler::ohVariantToVector<{type}>({name}Cpp, \"{name}\");\n",
        ),
    )
    .via(Route::Library),
    row(
        Stage::ToLibrary,
        D::Matrix,
        K::Primitive,
        concat!(
            "        {type} {name}Lib =\n",
            "            {namespaceObjects}::vvToQlMatrix({name}Cpp);\n",
        ),
    )
    .via(Route::Library),
    // ── to-enum ──────────────────────────────────────────────────────────────
    row(
        Stage::ToEnum,
        D::Scalar,
        K::Enumerated,
        concat!(
            "        {type} {name}Enum =\n",
            "            ObjectHandler::Create<{type}>()({name}Cpp);\n",
        ),
    ),
    row(
        Stage::ToEnum,
        D::Vector,
        K::Enumerated,
        concat!(
            "        std::vector<{type}> {name}Enum =\n",
            "            ObjectHandler::vectorStringToEnum<{type}>({name}Cpp, \"{name}\");\n",
        ),
    ),
    // ── to-object-ref ────────────────────────────────────────────────────────
    row(
        Stage::ToObjectRef,
        D::Scalar,
        K::LibraryObject,
        "        OH_GET_OBJECT({name}Obj, {name}Cpp, {namespaceObjects}::{classname})\n",
    )
    .via(Route::Object),
    row(
        Stage::ToObjectRef,
        D::Scalar,
        K::LibraryObject,
        "        OH_GET_OBJECT_DEFAULT({name}Obj, {name}Cpp, {namespaceObjects}::{classname})\n",
    )
    .via(Route::Object)
    .defaulted(),
    row(
        Stage::ToObjectRef,
        D::Vector,
        K::LibraryObject,
        concat!(
            "        std::vector<boost::shared_ptr<{namespaceObjects}::{classname}> > {name}Obj =\n",
            "            ObjectHandler::getObjectVector<{namespaceObjects}::{classname}>({name}Cpp);\n",
        ),
    )
    .via(Route::Object),
    row(
        Stage::ToObjectRef,
        D::Scalar,
        K::LibraryObject,
        concat!(
            "        OH_GET_REFERENCE({name}LibObj, {name}Cpp,\n",
            "            {namespaceObjects}::{classname}, {namespaceLibrary}::{classname})\n",
        ),
    )
    .via(Route::Reference),
    row(
        Stage::ToObjectRef,
        D::Scalar,
        K::LibraryObject,
        concat!(
            "        OH_GET_REFERENCE_DEFAULT({name}LibObj, {name}Cpp,\n",
            "            {namespaceObjects}::{classname}, {namespaceLibrary}::{classname})\n",
        ),
    )
    .via(Route::Reference)
    .defaulted(),
    row(
        Stage::ToObjectRef,
        D::Vector,
        K::LibraryObject,
        concat!(
            "        std::vector<boost::shared_ptr<{namespaceLibrary}::{classname}> > {name}LibObj =\n",
            "            ObjectHandler::getLibraryObjectVector<{namespaceObjects}::{classname}, {namespaceLibrary}::{classname}>({name}Cpp);\n",
        ),
    )
    .via(Route::Reference),
    row(
        Stage::ToObjectRef,
        D::Scalar,
        K::LibraryObject,
        concat!(
            "        OH_GET_OBJECT({name}Temp, {name}Cpp, ObjectHandler::Object)\n",
            "        boost::shared_ptr<{namespaceLibrary}::{classname}> {name}LibObj =\n",
            "            {namespaceObjects}::CoerceQuote<\n",
            "                {namespaceObjects}::{classname},\n",
            "                {namespaceLibrary}::{classname}>()(\n",
            "                    {name}Temp);\n",
        ),
    )
    .via(Route::Quote),
    row(
        Stage::ToObjectRef,
        D::Scalar,
        K::LibraryObject,
        concat!(
            "        OH_GET_OBJECT({name}Temp, {name}Cpp, ObjectHandler::Object)\n",
            "        boost::shared_ptr<{namespaceLibrary}::{classname}> {name}LibObj =\n",
            "            {namespaceObjects}::CoerceTermStructure<\n",
            "                {namespaceObjects}::{classname},\n",
            "                {namespaceLibrary}::{classname}>()(\n",
            "                    {name}Temp);\n",
        ),
    )
    .via(Route::TermStructure),
    row(
        Stage::ToObjectRef,
        D::Scalar,
        K::LibraryObject,
        concat!(
            "        OH_GET_OBJECT({name}Temp, {name}Cpp, ObjectHandler::Object)\n",
            "        boost::shared_ptr<{namespaceLibrary}::{classname}> {name}LibObj =\n",
            "            {namespaceObjects}::CoerceLibrarySame<\n",
            "                {namespaceObjects}::{classname},\n",
            "                {namespaceLibrary}::{classname}>()(\n",
            "                    {name}Temp);\n",
        ),
    )
    .via(Route::LibrarySame),
    // ── to-handle ────────────────────────────────────────────────────────────
    row(
        Stage::ToHandle,
        D::Scalar,
        K::ObjectHandleRef,
        concat!(
            "        OH_GET_OBJECT({name}Coerce, {name}Cpp, ObjectHandler::Object)\n",
            "        {namespaceLibrary}::Handle<{namespaceLibrary}::{classname}> {name}LibObj =\n",
            "            {namespaceObjects}::CoerceHandle<\n",
            "                {namespaceObjects}::{classname},\n",
            "                {namespaceLibrary}::{classname}>()(\n",
            "                    {name}Coerce);\n",
        ),
    )
    .via(Route::Object),
    row(
        Stage::ToHandle,
        D::Scalar,
        K::ObjectHandleRef,
        concat!(
            "        OH_GET_OBJECT_DEFAULT({name}Coerce, {name}Cpp, ObjectHandler::Object)\n",
            "        {namespaceLibrary}::Handle<{namespaceLibrary}::{classname}> {name}LibObj =\n",
            "            {namespaceObjects}::CoerceHandle<\n",
            "                {namespaceObjects}::{classname},\n",
            "                {namespaceLibrary}::{classname}>()(\n",
            "                    {name}Coerce, {namespaceLibrary}::Handle<{namespaceLibrary}::{classname}>());\n",
        ),
    )
    .via(Route::Object)
    .defaulted(),
    row(
        Stage::ToHandle,
        D::Scalar,
        K::ObjectHandleRef,
        concat!(
            "        {namespaceLibrary}::Handle<{namespaceLibrary}::Quote> {name}LibObj =\n",
            "            ObjectHandler::ohVariantToScalar<{namespaceLibrary}::Handle<{namespaceLibrary}::Quote> >(\n",
            "                {name}Cpp, \"{name}\");\n",
        ),
    )
    .via(Route::Quote),
    row(
        Stage::ToHandle,
        D::Scalar,
        K::ObjectHandleRef,
        concat!(
            "        {namespaceLibrary}::Handle<{namespaceLibrary}::Quote> {name}LibObj =\n",
            "            ObjectHandler::ohVariantToScalar<{namespaceLibrary}::Handle<{namespaceLibrary}::Quote> >(\n",
            "                {name}Cpp, \"{name}\", {namespaceLibrary}::Handle<{namespaceLibrary}::Quote>());\n",
        ),
    )
    .via(Route::Quote)
    .defaulted(),
    row(
        Stage::ToHandle,
        D::Vector,
        K::ObjectHandleRef,
        concat!(
            "        std::vector<{namespaceLibrary}::Handle<{namespaceLibrary}::Quote> > {name}LibObj =\n",
            "            ObjectHandler::ohVariantToVector<{namespaceLibrary}::Handle<{namespaceLibrary}::Quote> >({name}Cpp, \"{name}\");\n",
        ),
    )
    .via(Route::Quote),
    row(
        Stage::ToHandle,
        D::Matrix,
        K::ObjectHandleRef,
        concat!(
            "        std::vector<std::vector<{namespaceLibrary}::Handle<{namespaceLibrary}::Quote> > > {name}LibObj =\n",
            "            ObjectHandler::ohVariantToMatrix<{namespaceLibrary}::Handle<{namespaceLibrary}::Quote> >({name}Cpp, \"{name}\");\n",
        ),
    )
    .via(Route::Quote),
    // ── return-declaration ───────────────────────────────────────────────────
    row(
        Stage::ReturnDeclaration,
        D::Scalar,
        K::Primitive,
        "        {nativeType} returnValue = ",
    ),
    row(
        Stage::ReturnDeclaration,
        D::Scalar,
        K::Primitive,
        "        {type} returnValue = ",
    )
    .via(Route::Library),
    row(
        Stage::ReturnDeclaration,
        D::Scalar,
        K::String,
        "        std::string returnValue = ",
    ),
    row(
        Stage::ReturnDeclaration,
        D::Scalar,
        K::String,
        "        {type} returnValue = ",
    )
    .via(Route::Library),
    row(
        Stage::ReturnDeclaration,
        D::Scalar,
        K::Variant,
        "        ObjectHandler::Variant returnValue = ",
    ),
    row(
        Stage::ReturnDeclaration,
        D::Vector,
        K::Primitive,
        "        std::vector<{nativeType}> returnValue = ",
    ),
    row(
        Stage::ReturnDeclaration,
        D::Vector,
        K::Primitive,
        "        std::vector<{type}> returnValue = ",
    )
    .via(Route::Library),
    row(
        Stage::ReturnDeclaration,
        D::Vector,
        K::String,
        "        std::vector<std::string> returnValue = ",
    ),
    row(
        Stage::ReturnDeclaration,
        D::Vector,
        K::String,
        "        std::vector<{type}> returnValue = ",
    )
    .via(Route::Library),
    row(
        Stage::ReturnDeclaration,
        D::Vector,
        K::Variant,
        "        std::vector<ObjectHandler::Variant> returnValue = ",
    ),
    row(
        Stage::ReturnDeclaration,
        D::Matrix,
        K::Primitive,
        "        std::vector<std::vector<{nativeType}> > returnValue = ",
    ),
    row(
        Stage::ReturnDeclaration,
        D::Matrix,
        K::String,
        "        std::vector<std::vector<std::string> > returnValue = ",
    ),
    row(
        Stage::ReturnDeclaration,
        D::Matrix,
        K::Variant,
        "        std::vector<std::vector<ObjectHandler::Variant> > returnValue = ",
    ),
];
