mod html_document_tests;
mod tokenizer_tests;
