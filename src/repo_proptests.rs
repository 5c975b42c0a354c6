use crate::repo::from_input;
use proptest::prelude::*;

/// owner/repo に使える文字列（英数字、ハイフン、アンダースコア）
fn valid_name_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9_-]{0,19}".prop_map(|s| s)
}

/// git ref に使える文字列
fn valid_ref_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9][a-zA-Z0-9._/-]{0,19}".prop_map(|s| s)
}

proptest! {
    /// 異なる形式で同じ owner/repo を指定した場合、同じ結果が得られる
    #[test]
    fn prop_all_formats_produce_same_owner_name(
        owner in valid_name_strategy(),
        repo in valid_name_strategy()
    ) {
        let shorthand = format!("{}/{}", owner, repo);
        let result_short = from_input(&shorthand).unwrap();

        let https = format!("https://github.com/{}/{}", owner, repo);
        let result_https = from_input(&https).unwrap();

        let https_git = format!("https://github.com/{}/{}.git", owner, repo);
        let result_https_git = from_input(&https_git).unwrap();

        prop_assert_eq!(result_short.owner(), result_https.owner());
        prop_assert_eq!(result_short.owner(), result_https_git.owner());

        prop_assert_eq!(result_short.name(), result_https.name());
        prop_assert_eq!(result_short.name(), result_https_git.name());
    }

    /// ref 指定時に git_ref がそのまま保持される
    #[test]
    fn prop_ref_round_trips(
        owner in valid_name_strategy(),
        repo in valid_name_strategy(),
        git_ref in valid_ref_strategy()
    ) {
        let input = format!("{}/{}@{}", owner, repo, git_ref);
        let result = from_input(&input).unwrap();

        prop_assert_eq!(result.git_ref(), Some(git_ref.as_str()));
        prop_assert_eq!(result.full_name(), format!("{}/{}", owner, repo));
    }

    /// ref 未指定時は git_ref が None
    #[test]
    fn prop_no_ref_means_none(
        owner in valid_name_strategy(),
        repo in valid_name_strategy()
    ) {
        let input = format!("{}/{}", owner, repo);
        let result = from_input(&input).unwrap();

        prop_assert!(result.git_ref().is_none());
    }
}
