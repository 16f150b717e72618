mod show_normal_diff;
mod print_single_file;
mod reject_malformed_arguments;
