mod annotated_tags_are_peeled;
mod author_time_orders_commits;
mod cloned_repository;
mod commit_at_tag_instant_belongs_to_tag;
mod commits_reachable_from_every_ref;
mod empty_repository;
mod full_message_flag;
mod instants_compared_across_offsets;
mod merged_history_lists_each_commit_once;
mod prefixes_from_config_file;
mod untagged_commits_without_tags;
