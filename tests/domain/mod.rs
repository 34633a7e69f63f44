mod sanitized_filename_test;
mod storage_path_test;
mod token_result_test;
