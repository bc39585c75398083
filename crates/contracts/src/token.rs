crate::sol! {
    /// Minimal surface of the deployed token: an ERC-20 balance query plus an
    /// owner-gated `mint` that credits freshly created units to `to`.
    #[derive(Debug, PartialEq, Eq)]
    interface IMintableToken {
        function balanceOf(address account) external view returns (uint256);
        function mint(address to, uint256 amount) external;
    }
}
